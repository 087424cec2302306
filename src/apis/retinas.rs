use crate::core::{decode_json, ApiInvoker, ApiRequest, QueryParams, Result};
use crate::domain::model::Retina;

pub struct RetinasApi<I: ApiInvoker> {
    invoker: I,
}

impl<I: ApiInvoker> RetinasApi<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// 列出可用的 Retina；指定名稱時只回傳該 Retina
    pub async fn get_retinas(&self, retina_name: Option<&str>) -> Result<Option<Vec<Retina>>> {
        let query = QueryParams::new().push_opt("retina_name", retina_name);
        let request = ApiRequest::get("/retinas").with_query(query.into_pairs());
        decode_json(self.invoker.invoke(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::test_support::RecordingInvoker;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_retinas_without_filter() {
        let invoker = RecordingInvoker::returning(json!([
            {"retinaName": "en_associative", "numberOfRows": 128},
            {"retinaName": "en_synonymous"}
        ]));
        let api = RetinasApi::new(invoker.clone());

        let retinas = api.get_retinas(None).await.unwrap().unwrap();

        assert_eq!(retinas.len(), 2);
        assert_eq!(retinas[1].retina_name, "en_synonymous");
        let request = invoker.last_request();
        assert_eq!(request.path, "/retinas");
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_get_retinas_not_found() {
        let invoker = RecordingInvoker::not_found();
        let api = RetinasApi::new(invoker.clone());

        let retinas = api.get_retinas(Some("missing")).await.unwrap();

        assert!(retinas.is_none());
        assert_eq!(invoker.last_request().query_value("retina_name"), Some("missing"));
    }
}
