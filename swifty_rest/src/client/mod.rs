mod client;

pub use client::RestClient;
pub use client::parse_json_if_ok;

pub use crate::{
    api::services::ServicesApi,
    error::{handle_api_error, RestError},
};
