use crate::config::toml_config::LoggingConfig;
use crate::core::logging::{LogChain, LogCommand, Logger};
use crate::domain::ports::Console;

pub fn run(config: &LoggingConfig, out: &mut dyn Console) -> Logger {
    let chain = LogChain::standard();
    let mut logger = Logger::new();

    for entry in &config.entries {
        logger.add_command(Box::new(LogCommand::new(entry.level, &entry.message)), out);
    }

    logger.process_logs(&chain, out);
    logger
}
