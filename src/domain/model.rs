use serde::{Deserialize, Serialize};
use std::fmt;

/// 語意指紋：Retina 中被啟用的位元位置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub positions: Vec<u32>,
}

impl Fingerprint {
    pub fn new(positions: Vec<u32>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub df: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fingerprint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retina {
    pub retina_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_terms_in_retina: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_columns: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// base64 編碼的 PNG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    pub category_name: String,
    #[serde(default)]
    pub positions: Vec<u32>,
}

/// 兩個指紋之間的相似度量
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlapping_all: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlapping_left_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlapping_right_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_right: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_scoring: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub euclidean_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jaccard_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosine_similarity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// 語意運算式，序列化成 `{"term": "apple"}`、`{"and": [...]}` 等形式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Term(String),
    Text(String),
    Positions(Vec<u32>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Sub(Vec<Expression>),
    Xor(Vec<Expression>),
}

impl Expression {
    pub fn term(term: impl Into<String>) -> Self {
        Expression::Term(term.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Expression::Text(text.into())
    }

    pub fn and(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Or(operands.into_iter().collect())
    }

    pub fn sub(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Sub(operands.into_iter().collect())
    }

    pub fn xor(operands: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Xor(operands.into_iter().collect())
    }
}

impl From<Fingerprint> for Expression {
    fn from(fingerprint: Fingerprint) -> Self {
        Expression::Positions(fingerprint.positions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilterRequest {
    pub positive_examples: Vec<Expression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative_examples: Vec<Expression>,
}

impl CategoryFilterRequest {
    pub fn new(positive_examples: Vec<Expression>) -> Self {
        Self {
            positive_examples,
            negative_examples: Vec::new(),
        }
    }

    pub fn with_negative_examples(mut self, negative_examples: Vec<Expression>) -> Self {
        self.negative_examples = negative_examples;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosType {
    Noun,
    Verb,
    Adjective,
}

impl fmt::Display for PosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PosType::Noun => "NOUN",
            PosType::Verb => "VERB",
            PosType::Adjective => "ADJECTIVE",
        };
        f.write_str(value)
    }
}

impl std::str::FromStr for PosType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NOUN" => Ok(PosType::Noun),
            "VERB" => Ok(PosType::Verb),
            "ADJECTIVE" => Ok(PosType::Adjective),
            other => Err(format!("unknown part of speech: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotShape {
    Circle,
    Square,
}

impl fmt::Display for PlotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotShape::Circle => f.write_str("circle"),
            PlotShape::Square => f.write_str("square"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Base64Png,
}

impl fmt::Display for ImageEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageEncoding::Base64Png => f.write_str("base64/png"),
        }
    }
}

/// 分頁參數，兩者皆可省略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start_index: Option<u32>,
    pub max_results: Option<u32>,
}

impl Pagination {
    pub fn new(start_index: u32, max_results: u32) -> Self {
        Self {
            start_index: Some(start_index),
            max_results: Some(max_results),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageOptions {
    pub image_scalar: Option<u32>,
    pub plot_shape: Option<PlotShape>,
    pub image_encoding: Option<ImageEncoding>,
    pub sparsity: Option<f64>,
}
