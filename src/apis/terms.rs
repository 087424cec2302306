use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::{Context, Pagination, PosType, Term};
use crate::utils::validation::require_param;

pub struct TermsApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> TermsApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// 查詢單一詞彙；`term` 為 `None` 時分頁列出 Retina 的詞彙表
    pub async fn get_term(
        &self,
        retina_name: &str,
        term: Option<&str>,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
    ) -> Result<Option<Vec<Term>>> {
        let retina_name = require_param("retina_name", retina_name)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("term", term)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination);
        let request = ApiRequest::get("/terms").with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    pub async fn get_contexts_for_term(
        &self,
        retina_name: &str,
        term: &str,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
    ) -> Result<Option<Vec<Context>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let term = require_param("term", term)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push("term", term)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination);
        let request = ApiRequest::get("/terms/contexts").with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    pub async fn get_similar_terms(
        &self,
        retina_name: &str,
        term: &str,
        context_id: Option<i32>,
        pos_type: Option<PosType>,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
    ) -> Result<Option<Vec<Term>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let term = require_param("term", term)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push("term", term)
            .push_opt("context_id", context_id)
            .push_opt("pos_type", pos_type)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination);
        let request = ApiRequest::get("/terms/similar_terms").with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }
}
