use crate::utils::error::{RetinaError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_BASE_PATH: &str = "http://api.cortical.io/rest";
pub const API_KEY_ENV: &str = "RETINA_API_KEY";
pub const BASE_PATH_ENV: &str = "RETINA_BASE_PATH";

/// Retina API 用戶端設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            api_key: None,
            timeout_seconds: None,
            user_agent: None,
            default_headers: HashMap::new(),
        }
    }
}

/// TOML 檔案的外層結構：`[client]` 區段
#[derive(Debug, Deserialize)]
struct ConfigFile {
    client: Option<ClientConfig>,
}

impl ClientConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// 從環境變數建立設定
    pub fn from_env() -> Self {
        let base_path = std::env::var(BASE_PATH_ENV).unwrap_or_else(|_| default_base_path());
        Self {
            base_path,
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            ..Default::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RetinaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// 同 `from_toml_str`，但 `${VAR}` 的值由 `lookup` 提供
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = substitute_vars(content, lookup)?;

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| RetinaError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        file.client.ok_or_else(|| RetinaError::MissingConfigError {
            field: "client".to_string(),
        })
    }

    /// 以 `/` 結尾的 base path 會去掉結尾斜線
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("retina-sdk-rust/{}", env!("CARGO_PKG_VERSION")))
    }
}

/// 替換變數 (例如 ${RETINA_API_KEY})；查不到的保留原樣
fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RetinaError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_path", &self.base_path)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("client.timeout_seconds", timeout, 1)?;
        }

        if let Some(api_key) = &self.api_key {
            validation::validate_non_empty_string("client.api_key", api_key)?;
        }

        for name in self.default_headers.keys() {
            validation::validate_non_empty_string("client.default_headers", name)?;
        }

        Ok(())
    }
}
