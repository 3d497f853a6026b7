use serde::{Deserialize, Serialize};

use super::link::Link;
use crate::object_id::get_object_id;

/// A paged collection, e.g. the repositories or a folder's objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default, rename = "items-per-page")]
    pub items_per_page: Option<i64>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<EntryContent>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Entry content. Without `inline=true` only `src` is filled in; with it the
/// embedded resource lands in `properties` and friends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryContent {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default, rename = "content-type")]
    pub content_type: Option<String>,
    #[serde(flatten)]
    pub inline: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    /// Url the entry points at: the content source, or the entry id.
    pub fn url(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|content| content.src.as_deref())
            .unwrap_or(self.id.as_str())
    }

    pub fn object_id(&self) -> &str {
        get_object_id(self.url())
    }
}

impl Feed {
    /// Whether the feed advertises a `next` page.
    pub fn has_next_page(&self) -> bool {
        super::link::find_link(&self.links, "next").is_some()
    }
}
