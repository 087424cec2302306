use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// 原樣送出的純文字
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    Json,
    Png,
}

impl Accept {
    pub fn mime(&self) -> &'static str {
        match self {
            Accept::Json => "application/json",
            Accept::Png => "image/png",
        }
    }
}

/// 一次 REST 呼叫的完整描述
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub accept: Accept,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            accept: Accept::Json,
        }
    }

    pub fn post(path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body,
            accept: Accept::Json,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn accept(mut self, accept: Accept) -> Self {
        self.accept = accept;
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// 所有資源包裝共用的 HTTP 呼叫介面。
///
/// 回傳 `Ok(None)` 表示遠端回應 404；其他非 2xx 狀態以錯誤回傳。
#[async_trait]
pub trait ApiInvoker: Send + Sync {
    async fn invoke(&self, request: ApiRequest) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
impl<T: ApiInvoker + ?Sized> ApiInvoker for std::sync::Arc<T> {
    async fn invoke(&self, request: ApiRequest) -> Result<Option<Vec<u8>>> {
        (**self).invoke(request).await
    }
}
