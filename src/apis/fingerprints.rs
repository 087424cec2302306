use super::json_body;
use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::{Expression, Metric};
use crate::utils::validation::{require_non_empty, require_param};

/// 指紋比對
pub struct FingerprintsApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> FingerprintsApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub async fn compare(
        &self,
        retina_name: &str,
        left: &Expression,
        right: &Expression,
    ) -> Result<Option<Metric>> {
        let retina_name = require_param("retina_name", retina_name)?;

        let body = json_body(&[left, right])?;
        let request = ApiRequest::post("/compare", body)
            .with_query(QueryParams::new().retina(retina_name).into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    pub async fn compare_bulk(
        &self,
        retina_name: &str,
        pairs: &[(Expression, Expression)],
    ) -> Result<Option<Vec<Metric>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let pairs = require_non_empty("body", pairs)?;

        let body: Vec<[&Expression; 2]> = pairs.iter().map(|(l, r)| [l, r]).collect();
        let request = ApiRequest::post("/compare/bulk", json_body(&body)?)
            .with_query(QueryParams::new().retina(retina_name).into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }
}
