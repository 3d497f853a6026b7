use crate::{
    client::{parse_json_if_ok, RestClient},
    error::RestError,
    params::{inline_param, merge_params, page_param},
    types::{Feed, HomeDocument, ProductInfo},
};

#[async_trait::async_trait]
pub trait ServicesApi {
    /// Fetch the root services (home) document.
    async fn fetch_home_document(&self) -> Result<HomeDocument, RestError>;

    /// Fetch product and version information of the services.
    async fn fetch_product_info(&self) -> Result<ProductInfo, RestError>;

    /// Fetch one page of the repositories collection.
    async fn fetch_repositories(&self, page_no: i64, inline: bool) -> Result<Feed, RestError>;

    /// Fetch one page of any collection, e.g. a folder's objects.
    ///
    /// The page size comes from `ServiceConstants`; `inline` asks the server to
    /// embed each entry's resource.
    async fn fetch_feed(&self, url: &str, page_no: i64, inline: bool) -> Result<Feed, RestError>;
}

#[async_trait::async_trait]
impl ServicesApi for RestClient {
    async fn fetch_home_document(&self) -> Result<HomeDocument, RestError> {
        let url = self.uri().services_url();
        let resp = self.authed_get(&url).await?;
        parse_json_if_ok(resp).await
    }

    async fn fetch_product_info(&self) -> Result<ProductInfo, RestError> {
        let url = self.uri().product_info_url();
        let resp = self.authed_get(&url).await?;
        parse_json_if_ok(resp).await
    }

    async fn fetch_repositories(&self, page_no: i64, inline: bool) -> Result<Feed, RestError> {
        let url = self.uri().repositories_url();
        self.fetch_feed(&url, page_no, inline).await
    }

    async fn fetch_feed(&self, url: &str, page_no: i64, inline: bool) -> Result<Feed, RestError> {
        let mut query = page_param(page_no);
        if inline {
            query = merge_params(query, inline_param());
        }
        let resp = self.authed_get_with_query(url, &query).await?;
        parse_json_if_ok(resp).await
    }
}
