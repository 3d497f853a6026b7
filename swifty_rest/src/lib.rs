//! # SwiftyRest
//!
//! Helpers for talking to a Documentum-style REST service: endpoint URI
//! composition from a root URL and application context, pagination and
//! inline-expansion query parameters, object-id extraction from returned
//! links, and the process-wide login credential used for Basic auth.
//!
//! The [`client`] and [`api`] modules wire those helpers into an async
//! `reqwest` client.

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod object_id;
pub mod params;
pub mod types;
pub mod uri_builder;

pub use client::*;
pub use config::RestConfig;
pub use credential::{
    clear_current_login_credential, current_login_auth_string, current_login_credential,
    current_password, current_user_name, has_current_login_credential,
    set_current_login_credential, LoginCredential,
};
pub use error::{RestError, Result};
pub use object_id::{convert_cabinets_to_folders, get_object_id};
pub use params::{inline_param, page_param, ItemsPerPage, ParamMap, ServiceConstants};
pub use types::*;
pub use uri_builder::UriBuilder;
