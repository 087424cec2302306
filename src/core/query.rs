use crate::domain::model::Pagination;
use std::fmt::Display;

/// 組合查詢參數；值為 `None` 的參數不會送出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// 多值參數以逗號串接成單一參數，空集合則省略
    pub fn push_csv<T: Display>(self, key: &str, values: &[T]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, joined)
    }

    pub fn retina(self, retina_name: &str) -> Self {
        self.push("retina_name", retina_name)
    }

    pub fn page(self, pagination: Pagination) -> Self {
        self.push_opt("start_index", pagination.start_index)
            .push_opt("max_results", pagination.max_results)
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}
