use super::check_sparsity;
use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, RequestBody, Result};
use crate::domain::model::{Fingerprint, Language, Pagination, PosType, Text};
use crate::utils::validation::{require_non_empty, require_param};

pub struct TextApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> TextApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    async fn post_text<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        text: &str,
        query: QueryParams,
    ) -> Result<Option<T>> {
        let text = require_param("body", text)?;
        let request = ApiRequest::post(path, RequestBody::Text(text.to_string()))
            .with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    pub async fn get_representation_for_text(
        &self,
        retina_name: &str,
        text: &str,
    ) -> Result<Option<Vec<Fingerprint>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        self.post_text("/text", text, QueryParams::new().retina(retina_name))
            .await
    }

    pub async fn get_keywords_for_text(
        &self,
        retina_name: &str,
        text: &str,
    ) -> Result<Option<Vec<String>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        self.post_text("/text/keywords", text, QueryParams::new().retina(retina_name))
            .await
    }

    /// 將文字切成句子；指定 `pos_tags` 時只保留這些詞性的詞
    pub async fn get_tokens_for_text(
        &self,
        retina_name: &str,
        text: &str,
        pos_tags: &[PosType],
    ) -> Result<Option<Vec<String>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let query = QueryParams::new()
            .retina(retina_name)
            .push_csv("POStags", pos_tags);
        self.post_text("/text/tokenize", text, query).await
    }

    pub async fn get_slices_for_text(
        &self,
        retina_name: &str,
        text: &str,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
    ) -> Result<Option<Vec<Text>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination);
        self.post_text("/text/slices", text, query).await
    }

    pub async fn get_representations_for_bulk_text(
        &self,
        retina_name: &str,
        texts: &[String],
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Fingerprint>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let texts = require_non_empty("body", texts)?;
        check_sparsity(sparsity)?;

        let body: Vec<Text> = texts.iter().map(|t| Text::new(t.as_str())).collect();
        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("sparsity", sparsity);
        let request = ApiRequest::post("/text/bulk", RequestBody::Json(serde_json::to_value(body)?))
            .with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    /// 語言偵測不需要指定 Retina
    pub async fn get_language(&self, text: &str) -> Result<Option<Language>> {
        self.post_text("/text/detect_language", text, QueryParams::new())
            .await
    }
}
