pub mod client;
pub mod query;

pub use crate::domain::ports::{ApiInvoker, ApiRequest, RequestBody};
pub use crate::utils::error::Result;
pub use client::{decode_json, ApiClient};
pub use query::QueryParams;
