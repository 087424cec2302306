use crate::config::ClientConfig;
use crate::domain::ports::{ApiInvoker, ApiRequest, HttpMethod, RequestBody};
use crate::utils::error::{RetinaError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_KEY_HEADER: &str = "api-key";

/// 以 reqwest 實作的 Retina API 呼叫器，複製成本低
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_path: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            headers.insert(API_KEY_HEADER, header_value(API_KEY_HEADER, api_key)?);
        }
        for (name, value) in &config.default_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| RetinaError::InvalidParameterError {
                    field: "default_headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent());
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            base_path: config.normalized_base_path().to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| RetinaError::InvalidParameterError {
        field: name.to_string(),
        value: "<redacted>".to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl ApiInvoker for ApiClient {
    async fn invoke(&self, request: ApiRequest) -> Result<Option<Vec<u8>>> {
        let url = format!("{}{}", self.base_path, request.path);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        tracing::debug!(
            "📡 {} {} ({} query params)",
            request.method,
            url,
            request.query.len()
        );

        let mut builder = self
            .client
            .request(method, &url)
            .header(ACCEPT, request.accept.mime());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.header(CONTENT_TYPE, "text/plain").body(text),
        };

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", request.method, request.path, status);

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("No result for {} (404)", request.path);
            return Ok(None);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("❌ {} {} failed with status {}", request.method, request.path, status);
            return Err(RetinaError::ResponseError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(Some(bytes.to_vec()))
    }
}

/// 把回應內容解成模型；`None`（404）原樣傳遞
pub fn decode_json<T: DeserializeOwned>(body: Option<Vec<u8>>) -> Result<Option<T>> {
    match body {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}
