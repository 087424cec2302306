pub mod apis;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use apis::{
    ClassifyApi, ExpressionsApi, FingerprintsApi, ImageApi, RetinasApi, TermsApi, TextApi,
};
pub use config::ClientConfig;
pub use core::{ApiClient, ApiInvoker};
pub use domain::model::*;
pub use utils::error::{RetinaError, Result};
