use crate::config::client_config::{ClientConfig, API_KEY_ENV, BASE_PATH_ENV, DEFAULT_BASE_PATH};
use crate::domain::model::{Pagination, PlotShape, PosType};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "retina")]
#[command(about = "Command line client for the cortical.io Retina API")]
pub struct CliConfig {
    #[arg(long, env = BASE_PATH_ENV, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "TOML file with a [client] section")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "en_associative")]
    pub retina: String,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliPosType {
    Noun,
    Verb,
    Adjective,
}

impl From<CliPosType> for PosType {
    fn from(value: CliPosType) -> Self {
        match value {
            CliPosType::Noun => PosType::Noun,
            CliPosType::Verb => PosType::Verb,
            CliPosType::Adjective => PosType::Adjective,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliPlotShape {
    Circle,
    Square,
}

impl From<CliPlotShape> for PlotShape {
    fn from(value: CliPlotShape) -> Self {
        match value {
            CliPlotShape::Circle => PlotShape::Circle,
            CliPlotShape::Square => PlotShape::Square,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    #[arg(long)]
    pub start_index: Option<u32>,

    #[arg(long)]
    pub max_results: Option<u32>,
}

impl PageArgs {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            start_index: self.start_index,
            max_results: self.max_results,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List available retinas
    Retinas {
        #[arg(long, help = "Only describe this retina")]
        name: Option<String>,
    },
    /// Look up a term
    Term {
        term: String,
        #[arg(long)]
        fingerprint: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Contexts of a term
    Contexts {
        term: String,
        #[arg(long)]
        fingerprint: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Terms similar to a term
    SimilarTerms {
        term: String,
        #[arg(long)]
        context_id: Option<i32>,
        #[arg(long, value_enum)]
        pos_type: Option<CliPosType>,
        #[arg(long)]
        fingerprint: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Fingerprint of a text
    Fingerprint { text: String },
    /// Keywords of a text
    Keywords { text: String },
    /// Tokenize a text into sentences
    Tokenize {
        text: String,
        #[arg(long, value_enum, value_delimiter = ',')]
        pos_tags: Vec<CliPosType>,
    },
    /// Detect the language of a text
    Language { text: String },
    /// Resolve a JSON expression, e.g. '{"term":"apple"}'
    Expression {
        json: String,
        #[arg(long)]
        sparsity: Option<f64>,
    },
    /// Compare two JSON expressions
    Compare { left: String, right: String },
    /// Render the fingerprint of a JSON expression as PNG
    Image {
        json: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        scalar: Option<u32>,
        #[arg(long, value_enum)]
        shape: Option<CliPlotShape>,
    },
    /// Create a category filter from example texts
    Classify {
        #[arg(long)]
        name: String,
        #[arg(long = "positive", required = true)]
        positive: Vec<String>,
        #[arg(long = "negative")]
        negative: Vec<String>,
    },
}

impl Command {
    /// `--fingerprint` 對應的 `get_fingerprint` 參數；沒給旗標就不送，交由伺服器預設
    pub fn fingerprint_param(&self) -> Option<bool> {
        match self {
            Command::Term { fingerprint, .. }
            | Command::Contexts { fingerprint, .. }
            | Command::SimilarTerms { fingerprint, .. } => fingerprint.then_some(true),
            _ => None,
        }
    }
}

impl CliConfig {
    /// 合併設定：設定檔為基礎，命令列參數覆寫
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if self.config.is_none() || self.base_path != DEFAULT_BASE_PATH {
            config.base_path = self.base_path.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_path", &self.base_path)?;
        validation::validate_non_empty_string("retina", &self.retina)?;
        if let Some(timeout) = self.timeout {
            validation::validate_positive_number("timeout", timeout, 1)?;
        }
        Ok(())
    }
}
