//! Endpoint URI composition.

/// Suffix of the root services (home document) endpoint.
pub const SERVICES: &str = "/services";
/// Suffix of the repositories collection endpoint.
pub const REPOSITORIES: &str = "/repositories";
/// Suffix of the product info endpoint.
pub const PRODUCT_INFO: &str = "/product-info";

/// Builds absolute endpoint URIs for one deployed REST application.
///
/// Every URI is `root_url + context + suffix`, concatenated as-is: nothing is
/// validated, trimmed or escaped, so `"http://host:8080"` and `"/dctm-rest"`
/// give `"http://host:8080/dctm-rest/services"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriBuilder {
    root_url: String,
    context: String,
}

impl UriBuilder {
    /// Create a builder for the given root URL (scheme, host and port) and
    /// application context path. Any strings are accepted, including empty.
    pub fn new(root_url: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            context: context.into(),
        }
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// URI of the root services resource.
    pub fn services_url(&self) -> String {
        self.compose(SERVICES)
    }

    /// URI of the product info resource.
    pub fn product_info_url(&self) -> String {
        self.compose(PRODUCT_INFO)
    }

    /// URI of the repositories collection.
    pub fn repositories_url(&self) -> String {
        self.compose(REPOSITORIES)
    }

    fn compose(&self, suffix: &str) -> String {
        let mut url = String::with_capacity(self.root_url.len() + self.context.len() + suffix.len());
        url.push_str(&self.root_url);
        url.push_str(&self.context);
        url.push_str(suffix);
        url
    }
}
