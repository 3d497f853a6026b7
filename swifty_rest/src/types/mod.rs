pub mod error_types;
pub mod feed;
pub mod home;
pub mod link;
pub mod product_info;

// Re-export the main types commonly used
pub use error_types::Error as ApiError;
pub use feed::{Entry, EntryContent, Feed};
pub use home::{HomeDocument, HomeResource};
pub use link::{find_link, Link};
pub use product_info::{ProductInfo, ProductProperties};
