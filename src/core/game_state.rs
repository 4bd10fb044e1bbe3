use serde::{Deserialize, Serialize};

/// Level, score and health for one play session. Owned by the caller and
/// passed by reference; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    level: u32,
    score: u64,
    player_health: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            player_health: 100,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    pub fn set_player_health(&mut self, player_health: u32) {
        self.player_health = player_health;
    }

    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    pub fn add_score(&mut self, points: u64) -> u64 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.player_health = self.player_health.saturating_sub(amount);
        self.player_health
    }

    pub fn is_alive(&self) -> bool {
        self.player_health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = GameState::new();
        assert_eq!(state.level(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.player_health(), 100);
        assert!(state.is_alive());
    }

    #[test]
    fn test_setters_and_helpers() {
        let mut state = GameState::default();
        state.set_level(3);
        state.set_score(250);
        assert_eq!(state.advance_level(), 4);
        assert_eq!(state.add_score(50), 300);

        assert_eq!(state.take_damage(30), 70);
        assert_eq!(state.take_damage(500), 0);
        assert!(!state.is_alive());

        state.set_player_health(100);
        assert!(state.is_alive());
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"level": 1, "score": 0, "player_health": 100})
        );
    }
}
