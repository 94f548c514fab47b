use serde::Serialize;

use crate::{CellPos, GameOver, ModeKind, Rewards};

/// A board-mutating action, as requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRequest {
    /// Place the block in `slot` with its top-left cell at `(row, col)`.
    Place { slot: usize, row: usize, col: usize },
    ClearRow { row: usize },
    ClearColumn { col: usize },
    Swap { first: CellPos, second: CellPos },
}

impl ActionRequest {
    /// The board-action mode this request consumes, if any.
    #[must_use]
    pub fn mode(&self) -> Option<ModeKind> {
        match self {
            ActionRequest::Place { .. } => None,
            ActionRequest::ClearRow { .. } => Some(ModeKind::ClearRow),
            ActionRequest::ClearColumn { .. } => Some(ModeKind::ClearColumn),
            ActionRequest::Swap { .. } => Some(ModeKind::Swap),
        }
    }
}

/// A validated action that has not been applied yet.
///
/// Produced by `GameSession::begin_action`, so the presentation layer can
/// animate `affected` before committing. Committing validates again against
/// the state at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingAction {
    pub request: ActionRequest,
    /// Cells the action will write, clear, or swap.
    pub affected: Vec<CellPos>,
    pub(crate) generation: u64,
}

/// Result of a board click, interpreted by the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellClick {
    /// Nothing happens for this click.
    Ignored,
    /// First swap cell recorded.
    SwapAnchorSet(CellPos),
    /// The first swap cell was clicked again and is deselected.
    SwapAnchorCleared,
    /// The click completes an action, ready to commit.
    Ready(PendingAction),
}

/// Everything a committed action changed, for turn feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Words scored this turn, in scan order.
    pub words: Vec<String>,
    pub points: u32,
    pub cleared: Vec<CellPos>,
    pub rewards: Rewards,
    pub game_over: Option<GameOver>,
}

impl TurnReport {
    /// A short feedback line for the turn, or `None` when nothing was scored
    /// and the game goes on.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if let Some(game_over) = self.game_over {
            return Some(game_over.to_string());
        }
        if self.points == 0 {
            return None;
        }
        let message = match self.rewards.board_actions {
            0 => format!("Scored {} points!", self.points),
            1 => format!("Scored {} points! Gained 1 board action!", self.points),
            n => format!("Scored {} points! Gained {n} board actions!", self.points),
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(points: u32, board_actions: u32) -> TurnReport {
        TurnReport {
            points,
            rewards: Rewards {
                discards: 2,
                board_actions,
            },
            ..TurnReport::default()
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(TurnReport::default().message(), None);
        assert_eq!(report(100, 0).message().unwrap(), "Scored 100 points!");
        assert_eq!(
            report(200, 1).message().unwrap(),
            "Scored 200 points! Gained 1 board action!"
        );
        assert_eq!(
            report(500, 2).message().unwrap(),
            "Scored 500 points! Gained 2 board actions!"
        );
        let over = TurnReport {
            game_over: Some(GameOver::NewHighScore { score: 500 }),
            ..report(500, 2)
        };
        assert_eq!(over.message().unwrap(), "GAME OVER! New High Score: 500!");
    }

    #[test]
    fn test_request_modes() {
        assert_eq!(ActionRequest::Place { slot: 0, row: 0, col: 0 }.mode(), None);
        assert_eq!(
            ActionRequest::ClearColumn { col: 3 }.mode(),
            Some(ModeKind::ClearColumn)
        );
    }
}
