use super::json_body;
use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::{CategoryFilter, CategoryFilterRequest};
use crate::utils::validation::{require_non_empty, require_param};

pub struct ClassifyApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> ClassifyApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// 由正例（及可選的反例）訓練出分類過濾器
    pub async fn create_category_filter(
        &self,
        retina_name: &str,
        filter_name: &str,
        request: &CategoryFilterRequest,
    ) -> Result<Option<CategoryFilter>> {
        let retina_name = require_param("retina_name", retina_name)?;
        let filter_name = require_param("filter_name", filter_name)?;
        require_non_empty("positive_examples", &request.positive_examples)?;

        let query = QueryParams::new()
            .retina(retina_name)
            .push("filter_name", filter_name);
        let api_request = ApiRequest::post("/classify/create_category_filter", json_body(request)?)
            .with_query(query.into_pairs());

        tracing::debug!(
            "Creating category filter '{}' from {} positive / {} negative examples",
            filter_name,
            request.positive_examples.len(),
            request.negative_examples.len()
        );
        decode_json(self.invoker.invoke(api_request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::RecordingInvoker;
    use crate::core::RequestBody;
    use crate::domain::model::Expression;
    use crate::utils::error::RetinaError;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_category_filter() {
        let invoker = RecordingInvoker::returning(json!({
            "categoryName": "fruit",
            "positions": [5, 9, 33]
        }));
        let api = ClassifyApi::new(invoker.clone());

        let request = CategoryFilterRequest::new(vec![
            Expression::text("Apples are sweet."),
            Expression::text("Pears grow on trees."),
        ])
        .with_negative_examples(vec![Expression::text("Cars need fuel.")]);

        let filter = api
            .create_category_filter("en_associative", "fruit", &request)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(filter.category_name, "fruit");
        assert_eq!(filter.positions, vec![5, 9, 33]);

        let sent = invoker.last_request();
        assert_eq!(sent.path, "/classify/create_category_filter");
        assert_eq!(sent.query_value("filter_name"), Some("fruit"));
        assert_eq!(
            sent.body,
            RequestBody::Json(json!({
                "positive_examples": [{"text": "Apples are sweet."}, {"text": "Pears grow on trees."}],
                "negative_examples": [{"text": "Cars need fuel."}]
            }))
        );
    }

    #[tokio::test]
    async fn test_requires_filter_name_and_positive_examples() {
        let invoker = RecordingInvoker::returning(json!({"categoryName": "x", "positions": []}));
        let api = ClassifyApi::new(invoker.clone());

        let request = CategoryFilterRequest::new(vec![Expression::text("a")]);
        let err = api
            .create_category_filter("en_associative", "", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, RetinaError::MissingParameterError { ref parameter } if parameter == "filter_name"));

        let err = api
            .create_category_filter("en_associative", "fruit", &CategoryFilterRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RetinaError::MissingParameterError { ref parameter } if parameter == "positive_examples"));

        assert!(invoker.requests().is_empty());
    }
}
