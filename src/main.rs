use clap::Parser;
use pattern_demos::app::demos;
use pattern_demos::utils::error::DemoError;
use pattern_demos::utils::{logger, validation::Validate};
use pattern_demos::{CliConfig, DemoCommand, DemoConfig, StdoutConsole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pattern-demos");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_demo_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let demo = cli.demo();
    tracing::info!("Running demo: {:?}", demo);

    if let Err(e) = run_demo(&demo, &config).await {
        exit_with(&e);
    }

    tracing::info!("✅ Demo finished");
    Ok(())
}

async fn run_demo(demo: &DemoCommand, config: &DemoConfig) -> pattern_demos::Result<()> {
    let mut out = StdoutConsole;
    match demo {
        DemoCommand::Game => {
            demos::game::run(&config.game, &mut out)?;
        }
        DemoCommand::Auction { .. } => {
            demos::auction::run(&config.auction, &mut out);
        }
        DemoCommand::Import { .. } => {
            demos::import::run(&config.import, &mut out).await?;
        }
        DemoCommand::Logging => {
            demos::logging::run(&config.logging, &mut out);
        }
        DemoCommand::Enrollment => {
            demos::enrollment::run(&mut out);
        }
        DemoCommand::All => demos::run_all(config, &mut out).await?,
    }
    Ok(())
}

fn exit_with(e: &DemoError) -> ! {
    tracing::error!(
        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code())
}
