use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The root services resource: a JSON home document mapping link relations
/// to entry points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeDocument {
    #[serde(default)]
    pub resources: BTreeMap<String, HomeResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResource {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<serde_json::Value>,
}

impl HomeDocument {
    /// Href of the first resource whose relation ends with `name`, so both
    /// `"repositories"` and the full `http://identifiers.emc.com/linkrel/repositories`
    /// match.
    pub fn href(&self, name: &str) -> Option<&str> {
        self.resources
            .iter()
            .find(|(rel, _)| rel.as_str() == name || rel.ends_with(&format!("/{name}")))
            .map(|(_, resource)| resource.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_resource_by_short_name() {
        let body = r#"{"resources":{
            "http://identifiers.emc.com/linkrel/repositories":{"href":"http://h/dctm-rest/repositories","hints":{"allow":["GET"]}},
            "about":{"href":"http://h/dctm-rest/product-info"}
        }}"#;
        let home: HomeDocument = serde_json::from_str(body).unwrap();
        assert_eq!(home.href("repositories"), Some("http://h/dctm-rest/repositories"));
        assert_eq!(home.href("about"), Some("http://h/dctm-rest/product-info"));
        assert_eq!(home.href("cabinets"), None);
    }
}
