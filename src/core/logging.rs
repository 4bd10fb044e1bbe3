use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = DemoError;

    fn from_str(label: &str) -> Result<Self> {
        match label.to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "error" => Ok(LogLevel::Error),
            _ => Err(DemoError::invalid_argument("log level", label)),
        }
    }
}

pub trait LogHandler {
    fn can_handle(&self, level: LogLevel) -> bool;
    fn handle(&self, message: &str, out: &mut dyn Console);
}

/// Claims exactly one level and prints `<LEVEL>: <message>`.
#[derive(Debug, Clone, Copy)]
pub struct LevelHandler {
    level: LogLevel,
}

impl LevelHandler {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl LogHandler for LevelHandler {
    fn can_handle(&self, level: LogLevel) -> bool {
        level == self.level
    }

    fn handle(&self, message: &str, out: &mut dyn Console) {
        out.line(&format!("{}: {}", self.level, message));
    }
}

pub fn info_handler() -> LevelHandler {
    LevelHandler::new(LogLevel::Info)
}

pub fn debug_handler() -> LevelHandler {
    LevelHandler::new(LogLevel::Debug)
}

pub fn error_handler() -> LevelHandler {
    LevelHandler::new(LogLevel::Error)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Unhandled,
}

#[derive(Default)]
pub struct LogChain {
    handlers: Vec<Box<dyn LogHandler>>,
}

impl LogChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Info, then debug, then error.
    pub fn standard() -> Self {
        Self::new()
            .then(info_handler())
            .then(debug_handler())
            .then(error_handler())
    }

    pub fn then(mut self, handler: impl LogHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The first handler that claims the level handles the message; the
    /// rest of the chain is not consulted.
    pub fn process(&self, level: LogLevel, message: &str, out: &mut dyn Console) -> Dispatch {
        match self.handlers.iter().find(|handler| handler.can_handle(level)) {
            Some(handler) => {
                handler.handle(message, out);
                Dispatch::Handled
            }
            None => {
                tracing::warn!("No handler for {} message: {}", level, message);
                Dispatch::Unhandled
            }
        }
    }
}

pub trait Command {
    fn execute(&self, chain: &LogChain, out: &mut dyn Console);

    fn as_log_command(&self) -> Option<&LogCommand> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogCommand {
    level: LogLevel,
    message: String,
    queued_at: DateTime<Utc>,
}

impl LogCommand {
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            queued_at: Utc::now(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn queued_at(&self) -> DateTime<Utc> {
        self.queued_at
    }
}

impl Command for LogCommand {
    fn execute(&self, chain: &LogChain, out: &mut dyn Console) {
        out.line(&format!(
            "Log Level: {}, Message: {}",
            self.level, self.message
        ));
        chain.process(self.level, &self.message, out);
    }

    fn as_log_command(&self) -> Option<&LogCommand> {
        Some(self)
    }
}

/// Queues log commands and replays them in enqueue order.
#[derive(Debug, Default)]
pub struct Logger {
    commands: Vec<LogCommand>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Only log commands are queued. Anything else is reported and skipped.
    pub fn add_command(&mut self, command: Box<dyn Command>, out: &mut dyn Console) -> bool {
        match command.as_log_command() {
            Some(log) => {
                self.commands.push(log.clone());
                true
            }
            None => {
                tracing::warn!("Skipping command that is not a log command");
                out.warn("Invalid command type. Expected LogCommand.");
                false
            }
        }
    }

    pub fn process_logs(&self, chain: &LogChain, out: &mut dyn Console) {
        tracing::debug!("Processing {} queued log commands", self.commands.len());
        for command in &self.commands {
            command.execute(chain, out);
        }
    }
}
