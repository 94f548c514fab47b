use crate::{CellPos, ModeKind};

/// Why a block cannot be placed at a given origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("Cannot place block here: cell ({row}, {col}) is out of bounds.")]
    OutOfBounds { row: usize, col: usize },
    #[display("Cannot place block here: cell ({row}, {col}) is already occupied.")]
    Overlap { row: usize, col: usize },
}

/// Broad classes of rejected intents, for presentation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ErrorCategory {
    /// The intent makes no sense in the current state; treated as a no-op.
    InvalidIntent,
    /// The block does not fit at the requested origin.
    IllegalPlacement,
    /// A discard or board action was requested with none left.
    ResourceExhausted,
}

/// A player intent the engine rejected. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionError {
    #[display("the game is over")]
    GameOver,
    #[display("slot {index} does not exist")]
    SlotOutOfRange { index: usize },
    #[display("slot {index} is empty")]
    EmptySlot { index: usize },
    #[display("no block is selected")]
    NoSelection,
    #[display("blocks cannot be used while {mode} mode is active")]
    ModeActive { mode: ModeKind },
    #[display("{mode} mode is not active")]
    ModeNotActive { mode: ModeKind },
    #[display("cell ({row}, {col}) is outside the board")]
    CellOutOfRange { row: usize, col: usize },
    #[display("line {index} is outside the board")]
    LineOutOfRange { index: usize },
    #[display("cell {pos} is empty")]
    EmptyCell { pos: CellPos },
    #[display("cannot swap a cell with itself")]
    SameCell,
    #[display("there are no letters to clear")]
    EmptyLine,
    #[display("No discards remaining!")]
    NoDiscardsLeft,
    #[display("No board actions remaining! Score words to earn more.")]
    NoBoardActionsLeft,
    #[display("{_0}")]
    Placement(PlacementError),
    #[display("the action was prepared for a previous game")]
    StaleAction,
}

impl ActionError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            ActionError::Placement(_) => ErrorCategory::IllegalPlacement,
            ActionError::NoDiscardsLeft | ActionError::NoBoardActionsLeft => {
                ErrorCategory::ResourceExhausted
            }
            ActionError::GameOver
            | ActionError::SlotOutOfRange { .. }
            | ActionError::EmptySlot { .. }
            | ActionError::NoSelection
            | ActionError::ModeActive { .. }
            | ActionError::ModeNotActive { .. }
            | ActionError::CellOutOfRange { .. }
            | ActionError::LineOutOfRange { .. }
            | ActionError::EmptyCell { .. }
            | ActionError::SameCell
            | ActionError::EmptyLine
            | ActionError::StaleAction => ErrorCategory::InvalidIntent,
        }
    }
}

impl From<PlacementError> for ActionError {
    fn from(e: PlacementError) -> Self {
        ActionError::Placement(e)
    }
}

/// A malformed board in a fixture or serialized form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    #[display("expected at most 9 rows, got {rows}")]
    TooManyRows { rows: usize },
    #[display("row {row} has {width} cells, expected 9")]
    RowWidth { row: usize, width: usize },
    #[display("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}
