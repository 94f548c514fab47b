use serde::{Deserialize, Serialize};

use crate::{CellPos, GameConfig};

/// A board-action mode. At most one is active at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    #[display("clear row")]
    ClearRow,
    #[display("clear column")]
    ClearColumn,
    #[display("swap")]
    Swap,
}

/// What the next board click or slot intent means.
///
/// Selection and board-action modes are mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Interaction {
    #[default]
    Idle,
    BlockSelected(usize),
    ClearRow,
    ClearColumn,
    /// Swap mode, holding the first chosen cell once clicked.
    Swap { anchor: Option<CellPos> },
}

impl Interaction {
    #[must_use]
    pub fn for_mode(mode: ModeKind) -> Self {
        match mode {
            ModeKind::ClearRow => Interaction::ClearRow,
            ModeKind::ClearColumn => Interaction::ClearColumn,
            ModeKind::Swap => Interaction::Swap { anchor: None },
        }
    }

    #[must_use]
    pub fn mode(self) -> Option<ModeKind> {
        match self {
            Interaction::Idle | Interaction::BlockSelected(_) => None,
            Interaction::ClearRow => Some(ModeKind::ClearRow),
            Interaction::ClearColumn => Some(ModeKind::ClearColumn),
            Interaction::Swap { .. } => Some(ModeKind::Swap),
        }
    }

    #[must_use]
    pub fn selected_slot(self) -> Option<usize> {
        match self {
            Interaction::BlockSelected(index) => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn swap_anchor(self) -> Option<CellPos> {
        match self {
            Interaction::Swap { anchor } => anchor,
            _ => None,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GameOver {
    #[display("GAME OVER! New High Score: {score}!")]
    NewHighScore { score: u32 },
    #[display("GAME OVER! Final Score: {score}. High Score: {high_score}")]
    FinalScore { score: u32, high_score: u32 },
}

impl GameOver {
    #[must_use]
    pub fn score(self) -> u32 {
        match self {
            GameOver::NewHighScore { score } | GameOver::FinalScore { score, .. } => score,
        }
    }
}

/// Scores, resources and interaction state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub high_score: u32,
    pub discards: u32,
    pub board_actions: u32,
    pub scored_words: Vec<String>,
    pub interaction: Interaction,
    pub game_over: Option<GameOver>,
}

impl GameState {
    /// A fresh game carrying over `high_score`.
    #[must_use]
    pub fn new(config: &GameConfig, high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
            discards: config.initial_discards,
            board_actions: config.initial_board_actions,
            scored_words: vec![],
            interaction: Interaction::Idle,
            game_over: None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    #[must_use]
    pub fn active_mode(&self) -> Option<ModeKind> {
        self.interaction.mode()
    }

    /// The last `count` scored words, oldest first.
    #[must_use]
    pub fn recent_words(&self, count: usize) -> &[String] {
        let start = self.scored_words.len().saturating_sub(count);
        &self.scored_words[start..]
    }

    /// Ends the game, updating the high score when beaten.
    pub fn finish(&mut self) -> GameOver {
        let outcome = if self.score > self.high_score {
            self.high_score = self.score;
            GameOver::NewHighScore { score: self.score }
        } else {
            GameOver::FinalScore {
                score: self.score,
                high_score: self.high_score,
            }
        };
        self.interaction = Interaction::Idle;
        self.game_over = Some(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_config() {
        let state = GameState::new(&GameConfig::default(), 42);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 42);
        assert_eq!(state.discards, 5);
        assert_eq!(state.board_actions, 3);
        assert!(state.interaction.is_idle());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_finish_with_new_high_score() {
        let mut state = GameState::new(&GameConfig::default(), 100);
        state.score = 300;
        let outcome = state.finish();
        assert_eq!(outcome, GameOver::NewHighScore { score: 300 });
        assert_eq!(state.high_score, 300);
        assert_eq!(outcome.to_string(), "GAME OVER! New High Score: 300!");
    }

    #[test]
    fn test_finish_without_beating_high_score() {
        let mut state = GameState::new(&GameConfig::default(), 300);
        state.score = 300;
        let outcome = state.finish();
        assert_eq!(
            outcome.to_string(),
            "GAME OVER! Final Score: 300. High Score: 300"
        );
        assert_eq!(state.high_score, 300);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_recent_words() {
        let mut state = GameState::new(&GameConfig::default(), 0);
        assert!(state.recent_words(3).is_empty());
        state.scored_words = ["CAT", "DOG", "SUN", "TEA"].map(String::from).to_vec();
        assert_eq!(state.recent_words(3), ["DOG", "SUN", "TEA"]);
        assert_eq!(state.recent_words(10).len(), 4);
    }

    #[test]
    fn test_interaction_modes() {
        assert_eq!(Interaction::for_mode(ModeKind::Swap).mode(), Some(ModeKind::Swap));
        assert_eq!(Interaction::BlockSelected(2).selected_slot(), Some(2));
        assert_eq!(Interaction::ClearRow.selected_slot(), None);
        assert_eq!(ModeKind::ClearColumn.to_string(), "clear column");
    }
}
