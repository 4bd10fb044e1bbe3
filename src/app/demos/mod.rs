pub mod auction;
pub mod enrollment;
pub mod game;
pub mod import;
pub mod logging;

use crate::config::DemoConfig;
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Runs every demo in order, separated by a blank line. The first failure
/// stops the run.
pub async fn run_all(config: &DemoConfig, out: &mut dyn Console) -> Result<()> {
    game::run(&config.game, out)?;
    out.blank();
    auction::run(&config.auction, out);
    out.blank();
    logging::run(&config.logging, out);
    out.blank();
    enrollment::run(out);
    out.blank();
    import::run(&config.import, out).await?;
    Ok(())
}
