use crate::domain::ports::{ApiInvoker, ApiRequest};
use crate::utils::error::{RetinaError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// 記錄所有請求並回傳固定內容的假呼叫器
#[derive(Clone)]
pub(crate) struct RecordingInvoker {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    response: Option<Vec<u8>>,
    status: Option<u16>,
}

impl RecordingInvoker {
    pub(crate) fn returning(body: serde_json::Value) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Some(body.to_string().into_bytes()),
            status: None,
        }
    }

    pub(crate) fn returning_bytes(body: &[u8]) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Some(body.to_vec()),
            status: None,
        }
    }

    pub(crate) fn not_found() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
            status: None,
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
            status: Some(status),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was made")
    }
}

#[async_trait]
impl ApiInvoker for RecordingInvoker {
    async fn invoke(&self, request: ApiRequest) -> Result<Option<Vec<u8>>> {
        self.requests.lock().unwrap().push(request);
        if let Some(status) = self.status {
            return Err(RetinaError::ResponseError {
                status,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.response.clone())
    }
}
