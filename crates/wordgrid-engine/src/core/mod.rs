//! Board-level data structures: letters, block templates and instances, the
//! 9×9 board, the dictionary, and the word scanner.
//!
//! Nothing in this module knows about turns or resources; see
//! [`engine`](crate::engine) for the game rules built on top of it.

pub use self::{block::*, board::*, dictionary::*, letter::*, scanner::*, shape::*};

mod block;
mod board;
mod dictionary;
mod letter;
mod scanner;
mod shape;
