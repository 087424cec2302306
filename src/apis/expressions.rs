use super::{check_sparsity, json_body};
use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::{Context, Expression, Fingerprint, Pagination, PosType, Term};
use crate::utils::validation::{require_non_empty, require_param};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct ExpressionsApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> ExpressionsApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        query: QueryParams,
    ) -> Result<Option<T>> {
        let request = ApiRequest::post(path, json_body(body)?).with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }

    pub async fn resolve_expression(
        &self,
        retina_name: &str,
        expression: &Expression,
        sparsity: Option<f64>,
    ) -> Result<Option<Fingerprint>> {
        let retina_name = require_param("retina_name", retina_name)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("sparsity", sparsity);
        self.post("/expressions", expression, query).await
    }

    pub async fn get_contexts_for_expression(
        &self,
        retina_name: &str,
        expression: &Expression,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Context>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination)
            .push_opt("sparsity", sparsity);
        self.post("/expressions/contexts", expression, query).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn get_similar_terms_for_expression(
        &self,
        retina_name: &str,
        expression: &Expression,
        context_id: Option<i32>,
        pos_type: Option<PosType>,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Term>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("context_id", context_id)
            .push_opt("pos_type", pos_type)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination)
            .push_opt("sparsity", sparsity);
        self.post("/expressions/similar_terms", expression, query)
            .await
    }

    pub async fn resolve_bulk_expression(
        &self,
        retina_name: &str,
        expressions: &[Expression],
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Fingerprint>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let expressions = require_non_empty("body", expressions)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("sparsity", sparsity);
        self.post("/expressions/bulk", expressions, query).await
    }

    /// 每個運算式各自回傳一組 context，順序與輸入相同
    pub async fn get_contexts_for_bulk_expression(
        &self,
        retina_name: &str,
        expressions: &[Expression],
        get_fingerprint: Option<bool>,
        pagination: Pagination,
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Vec<Context>>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let expressions = require_non_empty("body", expressions)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination)
            .push_opt("sparsity", sparsity);
        self.post("/expressions/contexts/bulk", expressions, query)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn get_similar_terms_for_bulk_expression(
        &self,
        retina_name: &str,
        expressions: &[Expression],
        context_id: Option<i32>,
        pos_type: Option<PosType>,
        get_fingerprint: Option<bool>,
        pagination: Pagination,
        sparsity: Option<f64>,
    ) -> Result<Option<Vec<Vec<Term>>>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let expressions = require_non_empty("body", expressions)?;
        check_sparsity(sparsity)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push_opt("context_id", context_id)
            .push_opt("pos_type", pos_type)
            .push_opt("get_fingerprint", get_fingerprint)
            .page(pagination)
            .push_opt("sparsity", sparsity);
        self.post("/expressions/similar_terms/bulk", expressions, query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::RecordingInvoker;
    use crate::core::RequestBody;
    use crate::utils::error::RetinaError;
    use serde_json::json;

    #[tokio::test]
    async fn test_resolve_expression_sends_json_body() {
        let invoker = RecordingInvoker::returning(json!({"positions": [10, 20]}));
        let api = ExpressionsApi::new(invoker.clone());

        let expr = Expression::and([Expression::term("apple"), Expression::term("fruit")]);
        let fp = api
            .resolve_expression("en_associative", &expr, Some(0.5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fp.positions, vec![10, 20]);
        let request = invoker.last_request();
        assert_eq!(request.path, "/expressions");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"and": [{"term": "apple"}, {"term": "fruit"}]}))
        );
        assert_eq!(request.query_value("sparsity"), Some("0.5"));
    }

    #[tokio::test]
    async fn test_invalid_sparsity_is_rejected() {
        let invoker = RecordingInvoker::returning(json!({"positions": []}));
        let api = ExpressionsApi::new(invoker.clone());

        let err = api
            .resolve_expression("en_associative", &Expression::term("apple"), Some(2.0))
            .await
            .unwrap_err();

        assert!(matches!(err, RetinaError::InvalidParameterError { .. }));
        assert!(invoker.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_contexts_keep_nesting() {
        let invoker = RecordingInvoker::returning(json!([
            [{"context_label": "fruit", "context_id": 0}],
            [{"context_label": "computer", "context_id": 0}, {"context_label": "company", "context_id": 1}]
        ]));
        let api = ExpressionsApi::new(invoker.clone());

        let exprs = vec![Expression::term("pear"), Expression::term("apple")];
        let contexts = api
            .get_contexts_for_bulk_expression(
                "en_associative",
                &exprs,
                None,
                Pagination::new(0, 2),
                None,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[1][1].context_label.as_deref(), Some("company"));
        let request = invoker.last_request();
        assert_eq!(request.path, "/expressions/contexts/bulk");
        assert_eq!(
            request.body,
            RequestBody::Json(json!([{"term": "pear"}, {"term": "apple"}]))
        );
        assert_eq!(request.query_value("max_results"), Some("2"));
    }

    #[tokio::test]
    async fn test_similar_terms_for_expression_query() {
        let invoker = RecordingInvoker::returning(json!([{"term": "iphone"}]));
        let api = ExpressionsApi::new(invoker.clone());

        api.get_similar_terms_for_expression(
            "en_associative",
            &Expression::term("apple"),
            Some(1),
            Some(PosType::Noun),
            Some(true),
            Pagination::default(),
            None,
        )
        .await
        .unwrap();

        let request = invoker.last_request();
        assert_eq!(request.path, "/expressions/similar_terms");
        assert_eq!(request.query_value("context_id"), Some("1"));
        assert_eq!(request.query_value("get_fingerprint"), Some("true"));
        assert_eq!(request.query_value("sparsity"), None);
    }

    #[tokio::test]
    async fn test_empty_bulk_is_rejected() {
        let invoker = RecordingInvoker::returning(json!([]));
        let api = ExpressionsApi::new(invoker.clone());

        assert!(api
            .resolve_bulk_expression("en_associative", &[], None)
            .await
            .is_err());
        assert!(api
            .get_similar_terms_for_bulk_expression(
                "en_associative",
                &[],
                None,
                None,
                None,
                Pagination::default(),
                None
            )
            .await
            .is_err());
        assert!(invoker.requests().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_expression_not_found() {
        let api = ExpressionsApi::new(RecordingInvoker::not_found());
        let fp = api
            .resolve_expression("en_associative", &Expression::term("qwxz"), None)
            .await
            .unwrap();
        assert!(fp.is_none());
    }

    #[tokio::test]
    async fn test_contexts_for_expression_forwards_all_parameters() {
        let invoker = RecordingInvoker::returning(json!([
            {"context_label": "fruit", "context_id": 0, "fingerprint": {"positions": [3]}}
        ]));
        let api = ExpressionsApi::new(invoker.clone());

        let contexts = api
            .get_contexts_for_expression(
                "en_associative",
                &Expression::term("apple"),
                Some(true),
                Pagination::new(2, 7),
                Some(0.25),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(contexts[0].context_label.as_deref(), Some("fruit"));
        let request = invoker.last_request();
        assert_eq!(request.path, "/expressions/contexts");
        assert_eq!(request.body, RequestBody::Json(json!({"term": "apple"})));
        assert_eq!(
            request.query,
            vec![
                ("retina_name".to_string(), "en_associative".to_string()),
                ("get_fingerprint".to_string(), "true".to_string()),
                ("start_index".to_string(), "2".to_string()),
                ("max_results".to_string(), "7".to_string()),
                ("sparsity".to_string(), "0.25".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_bulk_similar_terms_keep_nesting() {
        let invoker = RecordingInvoker::returning(json!([
            [{"term": "pear"}],
            [{"term": "iphone"}, {"term": "macintosh"}]
        ]));
        let api = ExpressionsApi::new(invoker.clone());

        let exprs = vec![Expression::term("fruit"), Expression::term("apple")];
        let terms = api
            .get_similar_terms_for_bulk_expression(
                "en_associative",
                &exprs,
                Some(1),
                Some(PosType::Noun),
                None,
                Pagination::new(0, 5),
                Some(0.1),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0][0].term, "pear");
        assert_eq!(terms[1][1].term, "macintosh");
        let request = invoker.last_request();
        assert_eq!(request.path, "/expressions/similar_terms/bulk");
        assert_eq!(
            request.body,
            RequestBody::Json(json!([{"term": "fruit"}, {"term": "apple"}]))
        );
        assert_eq!(request.query_value("context_id"), Some("1"));
        assert_eq!(request.query_value("pos_type"), Some("NOUN"));
        assert_eq!(request.query_value("get_fingerprint"), None);
        assert_eq!(request.query_value("start_index"), Some("0"));
        assert_eq!(request.query_value("max_results"), Some("5"));
        assert_eq!(request.query_value("sparsity"), Some("0.1"));
    }

    #[tokio::test]
    async fn test_nan_sparsity_is_rejected() {
        let invoker = RecordingInvoker::returning(json!([]));
        let api = ExpressionsApi::new(invoker.clone());

        let err = api
            .get_contexts_for_expression(
                "en_associative",
                &Expression::term("apple"),
                None,
                Pagination::default(),
                Some(f64::NAN),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RetinaError::InvalidParameterError { ref field, .. } if field == "sparsity"));
        assert!(invoker.requests().is_empty());
    }
}
