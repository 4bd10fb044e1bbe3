use crate::core::auction::{ReserveAuction, ScriptedBid, StandardAuction};
use crate::core::import::{DEFAULT_CSV_OUTPUT, DEFAULT_INPUT, DEFAULT_JSON_OUTPUT};
use crate::core::logging::LogLevel;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings for every demo. Missing sections and fields fall back
/// to the scripted defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub game: GameConfig,
    pub auction: AuctionConfig,
    pub import: ImportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub enemies: Vec<String>,
    pub difficulties: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemies: vec!["zombie".to_string(), "alien".to_string()],
            difficulties: vec!["easy".to_string(), "hard".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AuctionKind {
    Standard,
    Reserve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    pub item: String,
    pub bidders: Vec<String>,
    pub format: AuctionKind,
    pub reserve_price: f64,
    /// Overrides the format's scripted bids when present.
    pub bids: Option<Vec<ScriptedBid>>,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            item: "Painting".to_string(),
            bidders: vec!["Alice".to_string(), "Bob".to_string()],
            format: AuctionKind::Standard,
            reserve_price: 200.0,
            bids: None,
        }
    }
}

impl AuctionConfig {
    pub fn scripted_bids(&self) -> Vec<ScriptedBid> {
        match (&self.bids, self.format) {
            (Some(bids), _) => bids.clone(),
            (None, AuctionKind::Standard) => StandardAuction::default_bids(),
            (None, AuctionKind::Reserve) => ReserveAuction::default_bids(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ImportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub base_dir: String,
    pub input: String,
    pub output: Option<String>,
    pub format: ImportFormat,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            input: DEFAULT_INPUT.to_string(),
            output: None,
            format: ImportFormat::Csv,
        }
    }
}

impl ImportConfig {
    pub fn output_file(&self) -> String {
        match (&self.output, self.format) {
            (Some(output), _) => output.clone(),
            (None, ImportFormat::Csv) => DEFAULT_CSV_OUTPUT.to_string(),
            (None, ImportFormat::Json) => DEFAULT_JSON_OUTPUT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub entries: Vec<LogEntry>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let entry = |level, message: &str| LogEntry {
            level,
            message: message.to_string(),
        };
        Self {
            entries: vec![
                entry(LogLevel::Info, "This is an info message."),
                entry(LogLevel::Debug, "This is a debug message."),
                entry(LogLevel::Error, "This is an error message."),
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        for enemy in &self.game.enemies {
            validation::validate_non_empty_string("game.enemies", enemy)?;
        }
        for difficulty in &self.game.difficulties {
            validation::validate_one_of("game.difficulties", difficulty, &["easy", "hard"])?;
        }

        validation::validate_non_empty_string("auction.item", &self.auction.item)?;
        for bidder in &self.auction.bidders {
            validation::validate_non_empty_string("auction.bidders", bidder)?;
        }
        validation::validate_non_negative_amount(
            "auction.reserve_price",
            self.auction.reserve_price,
        )?;
        if let Some(bids) = &self.auction.bids {
            for bid in bids {
                validation::validate_non_empty_string("auction.bids.bidder", &bid.bidder)?;
                validation::validate_non_negative_amount("auction.bids.amount", bid.amount)?;
            }
        }

        validation::validate_path("import.base_dir", &self.import.base_dir)?;
        validation::validate_path("import.input", &self.import.input)?;
        validation::validate_path("import.output", &self.import.output_file())?;

        Ok(())
    }
}
