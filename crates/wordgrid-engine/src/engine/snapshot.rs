use serde::Serialize;

use crate::{
    Block, BlockId, Board, CellPos, ChoosableSlots, GameConfig, GameOver, GameState, ModeKind,
    SLOT_COUNT, ShapeKind,
};

/// Read-only view of a slot's block for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSnapshot {
    pub id: BlockId,
    pub kind: ShapeKind,
    pub name: &'static str,
    /// Letter grid rows, `.` for empty cells.
    pub rows: Vec<String>,
}

impl From<&Block> for BlockSnapshot {
    fn from(block: &Block) -> Self {
        Self {
            id: block.id(),
            kind: block.kind(),
            name: block.kind().display_name(),
            rows: block.to_string().split('/').map(str::to_owned).collect(),
        }
    }
}

/// Everything the presentation layer reads to draw a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub slots: [Option<BlockSnapshot>; SLOT_COUNT],
    pub selected_slot: Option<usize>,
    pub active_mode: Option<ModeKind>,
    pub swap_anchor: Option<CellPos>,
    pub score: u32,
    pub high_score: u32,
    pub discards: u32,
    pub board_actions: u32,
    pub scored_words: Vec<String>,
    pub recent_words: Vec<String>,
    pub game_over: Option<GameOver>,
    /// The game-over line, if the game has ended.
    pub message: Option<String>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new(
        board: &Board,
        slots: &ChoosableSlots,
        state: &GameState,
        config: &GameConfig,
    ) -> Self {
        Self {
            board: board.clone(),
            slots: std::array::from_fn(|i| slots.get(i).map(BlockSnapshot::from)),
            selected_slot: state.interaction.selected_slot(),
            active_mode: state.active_mode(),
            swap_anchor: state.interaction.swap_anchor(),
            score: state.score,
            high_score: state.high_score,
            discards: state.discards,
            board_actions: state.board_actions,
            scored_words: state.scored_words.clone(),
            recent_words: state.recent_words(config.recent_word_count).to_vec(),
            game_over: state.game_over,
            message: state.game_over.map(|outcome| outcome.to_string()),
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Dictionary, GameSession, TileSeed};

    #[test]
    fn test_block_snapshot_rows() {
        let block = Block::from_ascii(BlockId(4), ShapeKind::LThree, "A.\nBC");
        let snapshot = BlockSnapshot::from(&block);
        assert_eq!(snapshot.rows, ["A.", "BC"]);
        assert_eq!(snapshot.name, "L-Shape (3)");
    }

    #[test]
    fn test_session_snapshot() {
        let mut session = GameSession::with_seed(
            Arc::new(Dictionary::default()),
            GameConfig::default(),
            10,
            TileSeed::from_bytes([1; 16]),
        );
        session.select_slot(1).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected_slot, Some(1));
        assert_eq!(snapshot.active_mode, None);
        assert_eq!(snapshot.high_score, 10);
        assert_eq!(snapshot.discards, 5);
        assert_eq!(snapshot.board_actions, 3);
        assert!(snapshot.slots.iter().all(Option::is_some));
        let triple = snapshot.slots[0].as_ref().unwrap();
        assert_eq!(triple.rows.len(), 3);
        assert!(triple.rows.iter().all(|row| row.len() == 1));
        assert!(!snapshot.is_game_over());
        assert!(snapshot.message.is_none());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["board"].as_str().unwrap().split('/').count(), 9);
        assert_eq!(json["slots"][0]["kind"], "Triple_shape");
    }
}
