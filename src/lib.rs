pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DemoCommand};

pub use adapters::{LocalStorage, MemoryConsole, StdoutConsole};
pub use config::DemoConfig;
pub use crate::core::import::{CsvImporter, ImportEngine, JsonImporter};
pub use utils::error::{DemoError, Result};
