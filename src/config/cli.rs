use crate::config::toml_config::{AuctionKind, DemoConfig, ImportFormat};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-demos")]
#[command(about = "Console demonstrations of classic object-oriented design patterns")]
pub struct CliConfig {
    /// Optional TOML file with demo settings
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit diagnostics as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<DemoCommand>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum DemoCommand {
    /// Enemy and item factories with the game state
    Game,
    /// Observer-driven auction run through a fixed template
    Auction {
        #[arg(long, value_enum)]
        format: Option<AuctionKind>,

        #[arg(long)]
        reserve_price: Option<f64>,

        #[arg(long)]
        item: Option<String>,
    },
    /// Template-method file import
    Import {
        #[arg(long)]
        input: Option<String>,

        #[arg(long)]
        output: Option<String>,

        #[arg(long)]
        base_dir: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ImportFormat>,
    },
    /// Chain of responsibility fed by queued log commands
    Logging,
    /// Student and course enrollment through narrow interfaces
    Enrollment,
    /// Every demo in sequence
    All,
}

impl CliConfig {
    pub fn demo(&self) -> DemoCommand {
        self.command.clone().unwrap_or(DemoCommand::All)
    }

    /// Loads the config file if one was given, then applies command-line overrides.
    pub fn load_demo_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut DemoConfig) {
        match &self.command {
            Some(DemoCommand::Auction {
                format,
                reserve_price,
                item,
            }) => {
                if let Some(format) = format {
                    config.auction.format = *format;
                }
                if let Some(reserve_price) = reserve_price {
                    config.auction.reserve_price = *reserve_price;
                }
                if let Some(item) = item {
                    config.auction.item = item.clone();
                }
            }
            Some(DemoCommand::Import {
                input,
                output,
                base_dir,
                format,
            }) => {
                if let Some(input) = input {
                    config.import.input = input.clone();
                }
                if let Some(output) = output {
                    config.import.output = Some(output.clone());
                }
                if let Some(base_dir) = base_dir {
                    config.import.base_dir = base_dir.clone();
                }
                if let Some(format) = format {
                    config.import.format = *format;
                }
            }
            _ => {}
        }
    }
}
