//! Connection settings, from defaults, the environment or a TOML file.

use serde::{Deserialize, Serialize};

use crate::credential::set_current_login_credential;
use crate::error::{RestError, Result};
use crate::params::{ServiceConstants, DEFAULT_ITEMS_PER_PAGE};
use crate::uri_builder::UriBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    pub root_url: String,
    pub context: String,
    pub items_per_page: i64,
    pub user_name: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            root_url: "http://localhost:8080".to_string(),
            context: "/dctm-rest".to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            user_name: None,
            password: None,
        }
    }
}

impl RestConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(root_url) = std::env::var("SWIFTY_REST_ROOT_URL") {
            config.root_url = root_url;
        }

        if let Ok(context) = std::env::var("SWIFTY_REST_CONTEXT") {
            config.context = context;
        }

        if let Ok(items) = std::env::var("SWIFTY_REST_ITEMS_PER_PAGE") {
            config.items_per_page = items
                .trim()
                .parse()
                .map_err(|_| RestError::config_error("Invalid SWIFTY_REST_ITEMS_PER_PAGE"))?;
        }

        if let Ok(user_name) = std::env::var("SWIFTY_REST_USER") {
            if !user_name.is_empty() {
                config.user_name = Some(user_name);
            }
        }
        config.password = std::env::var("SWIFTY_REST_PASSWORD").ok();

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RestError::config_error(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| RestError::config_error(format!("Failed to parse config file: {}", e)))
    }

    pub fn uri_builder(&self) -> UriBuilder {
        UriBuilder::new(self.root_url.as_str(), self.context.as_str())
    }

    /// Publish the page size to [`ServiceConstants`] and, if a user name is
    /// configured, make it the current login credential.
    pub fn apply(&self) {
        ServiceConstants::set_items_per_page(self.items_per_page);
        if let Some(user_name) = &self.user_name {
            set_current_login_credential(user_name.as_str(), self.password.clone().unwrap_or_default());
        }
    }
}
