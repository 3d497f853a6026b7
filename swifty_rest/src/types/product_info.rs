use serde::{Deserialize, Serialize};

use super::link::Link;

/// Version information of the deployed REST services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub properties: ProductProperties,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductProperties {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub minor: Option<String>,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
}
