//! Game rules and session state.
//!
//! This module builds the turn-based game on top of the [`core`](crate::core)
//! data structures:
//!
//! - [`TileGenerator`] - Weighted random blocks from a [`TileSeed`]
//! - [`ChoosableSlots`] - The three blocks awaiting placement
//! - [`score_matches`] / [`Rewards`] - Turn scoring and the resource economy
//! - [`is_game_over`] - Exhaustive search for any legal placement
//! - [`GameSession`] - The turn/action state machine and player intents
//! - [`SessionSnapshot`] - Serializable read model for presentation
//!
//! # Turn Flow
//!
//! 1. The player selects a slot, optionally rotating or discarding its block
//! 2. The block is placed on the board
//! 3. Words are scanned, scored, and cleared; resources are awarded
//! 4. The used slot is refilled
//! 5. The game ends when no slot block fits anywhere in any rotation
//!
//! Board actions (clear row, clear column, swap) are spent through modes:
//! enter a mode, click cells, and commit the resulting pending action.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordgrid_engine::{CellClick, Dictionary, GameConfig, GameSession, ModeKind};
//!
//! let mut session = GameSession::new(Arc::new(Dictionary::builtin()), GameConfig::default(), 0);
//! session.select_slot(0).unwrap();
//! session.rotate_selected().unwrap();
//! session.place_selected(4, 0).unwrap();
//!
//! if session.board().row_has_letters(4) {
//!     session.enter_mode(ModeKind::ClearRow).unwrap();
//!     if let CellClick::Ready(pending) = session.click_cell(4, 0).unwrap() {
//!         // `pending.affected` can be animated before committing.
//!         session.commit_action(pending).unwrap();
//!     }
//! }
//! assert!(!session.board().row_has_letters(4));
//! ```

pub use self::{
    action::*, generator::*, oracle::*, scoring::*, session::*, slots::*, snapshot::*, state::*,
};

mod action;
mod generator;
mod oracle;
mod scoring;
mod session;
mod slots;
mod snapshot;
mod state;
