pub mod classify;
pub mod expressions;
pub mod fingerprints;
pub mod image;
pub mod retinas;
pub mod terms;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify::ClassifyApi;
pub use expressions::ExpressionsApi;
pub use fingerprints::FingerprintsApi;
pub use image::ImageApi;
pub use retinas::RetinasApi;
pub use terms::TermsApi;
pub use text::TextApi;

use crate::core::{ApiClient, RequestBody, Result};
use crate::utils::validation::validate_range;
use serde::Serialize;

pub(crate) fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<RequestBody> {
    Ok(RequestBody::Json(serde_json::to_value(value)?))
}

pub(crate) fn check_sparsity(sparsity: Option<f64>) -> Result<()> {
    match sparsity {
        Some(value) => validate_range("sparsity", value, 0.0, 1.0),
        None => Ok(()),
    }
}

impl ApiClient {
    pub fn retinas(&self) -> RetinasApi<ApiClient> {
        RetinasApi::new(self.clone())
    }

    pub fn terms(&self) -> TermsApi<ApiClient> {
        TermsApi::new(self.clone())
    }

    pub fn text(&self) -> TextApi<ApiClient> {
        TextApi::new(self.clone())
    }

    pub fn expressions(&self) -> ExpressionsApi<ApiClient> {
        ExpressionsApi::new(self.clone())
    }

    pub fn fingerprints(&self) -> FingerprintsApi<ApiClient> {
        FingerprintsApi::new(self.clone())
    }

    pub fn image(&self) -> ImageApi<ApiClient> {
        ImageApi::new(self.clone())
    }

    pub fn classify(&self) -> ClassifyApi<ApiClient> {
        ClassifyApi::new(self.clone())
    }
}
