use crate::config::toml_config::GameConfig;
use crate::core::game::{create_enemy, items_factory, Difficulty};
use crate::core::game_state::GameState;
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Resolves every configured enemy and difficulty before printing, so an
/// unknown discriminator fails the demo without partial output.
pub fn run(config: &GameConfig, out: &mut dyn Console) -> Result<GameState> {
    let state = GameState::new();
    if let Ok(snapshot) = serde_json::to_string(&state) {
        tracing::debug!("Initial game state: {}", snapshot);
    }

    let enemies = config
        .enemies
        .iter()
        .map(|kind| create_enemy(kind))
        .collect::<Result<Vec<_>>>()?;
    let difficulties = config
        .difficulties
        .iter()
        .map(|label| label.parse::<Difficulty>())
        .collect::<Result<Vec<_>>>()?;

    out.line(&format!("Starting Level: {}", state.level()));

    out.blank();
    out.line("Enemies in the Level:");
    for enemy in &enemies {
        out.line(enemy.attack());
    }

    for difficulty in difficulties {
        let factory = items_factory(difficulty);
        out.blank();
        out.line(&format!("{} Mode Items:", difficulty));
        out.line(&format!("Weapon: {}", factory.weapon()));
        out.line(&format!("Power-Up: {}", factory.power_up()));
    }

    Ok(state)
}
