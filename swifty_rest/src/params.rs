//! Query parameters for inline expansion and pagination.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::Result;

/// Query parameter map handed to the transport.
pub type ParamMap = BTreeMap<String, String>;

pub const INLINE: &str = "inline";
pub const ITEMS_PER_PAGE: &str = "items-per-page";
pub const PAGE: &str = "page";

pub const DEFAULT_ITEMS_PER_PAGE: i64 = 20;

/// Source of the configured page size.
pub trait ItemsPerPage {
    fn items_per_page(&self) -> i64;
}

static ITEMS_PER_PAGE_SETTING: AtomicI64 = AtomicI64::new(DEFAULT_ITEMS_PER_PAGE);

/// Process-wide service settings used by [`page_param`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceConstants;

impl ServiceConstants {
    pub fn items_per_page() -> i64 {
        ITEMS_PER_PAGE_SETTING.load(Ordering::Relaxed)
    }

    pub fn set_items_per_page(items_per_page: i64) {
        ITEMS_PER_PAGE_SETTING.store(items_per_page, Ordering::Relaxed);
    }
}

impl ItemsPerPage for ServiceConstants {
    fn items_per_page(&self) -> i64 {
        ServiceConstants::items_per_page()
    }
}

impl ItemsPerPage for i64 {
    fn items_per_page(&self) -> i64 {
        *self
    }
}

/// `{"inline": "true"}`: ask the server to embed entry content.
pub fn inline_param() -> ParamMap {
    ParamMap::from([(INLINE.to_string(), "true".to_string())])
}

/// `{"items-per-page": <configured>, "page": <page_no>}`.
///
/// The page size is read from [`ServiceConstants`] on every call. Page numbers
/// are passed through as given, zero and negative included.
pub fn page_param(page_no: i64) -> ParamMap {
    page_param_with(&ServiceConstants, page_no)
}

pub fn page_param_with<S: ItemsPerPage + ?Sized>(source: &S, page_no: i64) -> ParamMap {
    ParamMap::from([
        (ITEMS_PER_PAGE.to_string(), source.items_per_page().to_string()),
        (PAGE.to_string(), page_no.to_string()),
    ])
}

/// Union of two maps; entries of `extra` replace those of `base`.
pub fn merge_params(mut base: ParamMap, extra: ParamMap) -> ParamMap {
    base.extend(extra);
    base
}

/// Serialise a map as an `application/x-www-form-urlencoded` query string.
pub fn to_query_string(params: &ParamMap) -> Result<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// `url` with `params` appended as its query string. An empty map leaves
/// `url` untouched; a `url` that already has a query gets `&`.
pub fn append_query(url: &str, params: &ParamMap) -> Result<String> {
    let query = to_query_string(params)?;
    if query.is_empty() {
        return Ok(url.to_string());
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{url}{separator}{query}"))
}
