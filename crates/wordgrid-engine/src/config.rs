use serde::{Deserialize, Serialize};

/// Tunable rules of a game session.
///
/// Every field has a default, so a partial JSON object is a valid config.
///
/// # Example
///
/// ```
/// use wordgrid_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "initial_discards": 8 }"#).unwrap();
/// assert_eq!(config.initial_discards, 8);
/// assert_eq!(config.initial_board_actions, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Discards available at the start of a game.
    pub initial_discards: u32,
    /// Board actions available at the start of a game.
    pub initial_board_actions: u32,
    /// Discards awarded for every turn that scores.
    pub discards_per_scoring_turn: u32,
    /// Turn points needed for each board action awarded.
    pub points_per_board_action: u32,
    /// Length of the "recent words" tail in the read model.
    pub recent_word_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_discards: 5,
            initial_board_actions: 3,
            discards_per_scoring_turn: 2,
            points_per_board_action: 200,
            recent_word_count: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("points_per_board_action must be greater than zero")]
    ZeroPointsPerBoardAction,
    #[display("recent_word_count must be greater than zero")]
    ZeroRecentWordCount,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points_per_board_action == 0 {
            return Err(ConfigError::ZeroPointsPerBoardAction);
        }
        if self.recent_word_count == 0 {
            return Err(ConfigError::ZeroRecentWordCount);
        }
        Ok(())
    }
}
