use std::sync::Arc;

use crate::{
    ActionError, ActionRequest, BOARD_HEIGHT, BOARD_WIDTH, Block, Board, CellClick, CellPos,
    ChoosableSlots, Dictionary, GameConfig, GameOver, GameState, Interaction, ModeKind,
    PendingAction, PlacementError, Rewards, SLOT_COUNT, SessionSnapshot, ShapeKind, TileGenerator,
    TileSeed, TurnReport, is_game_over, scan, score_matches,
};

/// One player's game: board, choosable slots, resources, and the turn/action
/// state machine driving them.
///
/// Every intent either applies completely or returns an [`ActionError`] and
/// leaves the session untouched. The only exception is a mode intent issued
/// with no board actions left, which also exits the active mode.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use wordgrid_engine::{Dictionary, GameConfig, GameSession};
///
/// let dictionary = Arc::new(Dictionary::new(["CAT"]));
/// let mut session = GameSession::new(dictionary, GameConfig::default(), 0);
///
/// // Slot 0 always starts with the vertical triple.
/// let report = session.place_block(0, 0, 0).unwrap();
/// assert!(report.game_over.is_none());
/// assert_eq!(session.board().occupied_count() + report.cleared.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    generator: TileGenerator,
    board: Board,
    slots: ChoosableSlots,
    state: GameState,
    generation: u64,
}

impl GameSession {
    /// Starts a game with randomly seeded tiles.
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, config: GameConfig, high_score: u32) -> Self {
        Self::with_generator(dictionary, config, high_score, TileGenerator::new())
    }

    /// Like [`Self::new`], but every game of the session draws tiles from `seed`'s sequence.
    #[must_use]
    pub fn with_seed(
        dictionary: Arc<Dictionary>,
        config: GameConfig,
        high_score: u32,
        seed: TileSeed,
    ) -> Self {
        Self::with_generator(dictionary, config, high_score, TileGenerator::with_seed(seed))
    }

    fn with_generator(
        dictionary: Arc<Dictionary>,
        config: GameConfig,
        high_score: u32,
        generator: TileGenerator,
    ) -> Self {
        let mut session = Self {
            dictionary,
            config,
            generator,
            board: Board::EMPTY,
            slots: ChoosableSlots::default(),
            state: GameState::new(&config, high_score),
            generation: 0,
        };
        session.new_game();
        session
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn slots(&self) -> &ChoosableSlots {
        &self.slots
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(&self.board, &self.slots, &self.state, &self.config)
    }

    /// Resets everything but the high score and deals fresh blocks.
    ///
    /// Slot 0 always receives the vertical triple.
    pub fn new_game(&mut self) {
        self.board = Board::EMPTY;
        self.state = GameState::new(&self.config, self.state.high_score);
        self.slots = ChoosableSlots::new([
            self.generator.generate(ShapeKind::Triple),
            self.generator.random_block(),
            self.generator.random_block(),
        ]);
        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            high_score = self.state.high_score,
            "new game"
        );
    }

    /// Same as [`Self::new_game`]; accepted even after game over.
    pub fn restart(&mut self) {
        self.new_game();
    }

    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.state.is_game_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    fn occupied_slot(&self, index: usize) -> Result<&Block, ActionError> {
        if index >= SLOT_COUNT {
            return Err(ActionError::SlotOutOfRange { index });
        }
        self.slots.get(index).ok_or(ActionError::EmptySlot { index })
    }

    /// Index of the selected slot; rejected while a board-action mode is active.
    fn selection_for_block_intent(&self) -> Result<usize, ActionError> {
        if let Some(mode) = self.state.active_mode() {
            return Err(ActionError::ModeActive { mode });
        }
        self.state
            .interaction
            .selected_slot()
            .ok_or(ActionError::NoSelection)
    }

    /// Selects slot `index`, replacing any previous selection.
    ///
    /// Rejected while a board-action mode is active; the mode stays on.
    pub fn select_slot(&mut self, index: usize) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if let Some(mode) = self.state.active_mode() {
            return Err(ActionError::ModeActive { mode });
        }
        self.occupied_slot(index)?;
        self.state.interaction = Interaction::BlockSelected(index);
        tracing::debug!(slot = index, "slot selected");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.state.interaction.is_block_selected() {
            self.state.interaction = Interaction::Idle;
        }
    }

    /// Rotates the selected block clockwise in its slot.
    pub fn rotate_selected(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        let index = self.selection_for_block_intent()?;
        let block = self
            .slots
            .get_mut(index)
            .ok_or(ActionError::EmptySlot { index })?;
        block.rotate_clockwise();
        tracing::debug!(slot = index, block = %block, "block rotated");
        Ok(())
    }

    /// Spends a discard to replace the selected block, then clears the selection.
    ///
    /// A discard never ends the game, even when the new block cannot be placed.
    pub fn discard_selected(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        let index = self.selection_for_block_intent()?;
        self.occupied_slot(index)?;
        if self.state.discards == 0 {
            return Err(ActionError::NoDiscardsLeft);
        }
        self.state.discards -= 1;
        let block = self.generator.random_block();
        self.slots.replace(index, block);
        self.state.interaction = Interaction::Idle;
        tracing::debug!(slot = index, discards = self.state.discards, "block discarded");
        Ok(())
    }

    /// Places the block in `slot` with its top-left cell at `(row, col)`, then
    /// scores the turn, refills the slot and checks for game over.
    ///
    /// Placement ends any active board-action mode.
    pub fn place_block(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
    ) -> Result<TurnReport, ActionError> {
        let pending = self.begin_action(ActionRequest::Place { slot, row, col })?;
        self.commit_action(pending)
    }

    /// Places the selected block at `(row, col)`.
    pub fn place_selected(&mut self, row: usize, col: usize) -> Result<TurnReport, ActionError> {
        self.ensure_playing()?;
        let slot = self
            .state
            .interaction
            .selected_slot()
            .ok_or(ActionError::NoSelection)?;
        self.place_block(slot, row, col)
    }

    /// Enters a board-action mode, leaving any other mode or selection.
    ///
    /// With no board actions left the mode is not entered and any active mode
    /// is exited.
    pub fn enter_mode(&mut self, mode: ModeKind) -> Result<(), ActionError> {
        self.ensure_playing()?;
        if self.state.board_actions == 0 {
            self.exit_mode();
            return Err(ActionError::NoBoardActionsLeft);
        }
        self.state.interaction = Interaction::for_mode(mode);
        tracing::debug!(%mode, "mode entered");
        Ok(())
    }

    /// Leaves the active board-action mode, returning it.
    pub fn exit_mode(&mut self) -> Option<ModeKind> {
        let mode = self.state.active_mode()?;
        self.state.interaction = Interaction::Idle;
        tracing::debug!(%mode, "mode exited");
        Some(mode)
    }

    /// Exits `mode` if it is active, otherwise enters it.
    pub fn toggle_mode(&mut self, mode: ModeKind) -> Result<(), ActionError> {
        if self.state.active_mode() == Some(mode) {
            self.exit_mode();
            return Ok(());
        }
        self.enter_mode(mode)
    }

    /// Interprets a click on board cell `(row, col)` according to the active mode.
    ///
    /// A click completing an action returns [`CellClick::Ready`] with the
    /// pending action; pass it to [`Self::commit_action`] to apply it.
    pub fn click_cell(&mut self, row: usize, col: usize) -> Result<CellClick, ActionError> {
        self.ensure_playing()?;
        let pos = CellPos::checked(row, col).ok_or(ActionError::CellOutOfRange { row, col })?;
        let Some(mode) = self.state.active_mode() else {
            return Ok(CellClick::Ignored);
        };
        if self.state.board_actions == 0 {
            self.exit_mode();
            return Err(ActionError::NoBoardActionsLeft);
        }

        let request = match mode {
            ModeKind::ClearRow => {
                if !self.board.row_has_letters(row) {
                    return Ok(CellClick::Ignored);
                }
                ActionRequest::ClearRow { row }
            }
            ModeKind::ClearColumn => {
                if !self.board.column_has_letters(col) {
                    return Ok(CellClick::Ignored);
                }
                ActionRequest::ClearColumn { col }
            }
            ModeKind::Swap => {
                if self.board.cell(pos).is_none() {
                    return Ok(CellClick::Ignored);
                }
                match self.state.interaction.swap_anchor() {
                    None => {
                        self.state.interaction = Interaction::Swap { anchor: Some(pos) };
                        return Ok(CellClick::SwapAnchorSet(pos));
                    }
                    Some(anchor) if anchor == pos => {
                        self.state.interaction = Interaction::Swap { anchor: None };
                        return Ok(CellClick::SwapAnchorCleared);
                    }
                    Some(first) => ActionRequest::Swap { first, second: pos },
                }
            }
        };
        self.begin_action(request).map(CellClick::Ready)
    }

    /// Validates `request` against the current state without changing anything.
    ///
    /// The returned [`PendingAction`] lists the cells the action will touch.
    pub fn begin_action(&self, request: ActionRequest) -> Result<PendingAction, ActionError> {
        let affected = self.validate(&request)?;
        Ok(PendingAction {
            request,
            affected,
            generation: self.generation,
        })
    }

    /// Applies a pending action after validating it again.
    ///
    /// Actions begun before the last [`Self::new_game`] are rejected with
    /// [`ActionError::StaleAction`].
    pub fn commit_action(&mut self, pending: PendingAction) -> Result<TurnReport, ActionError> {
        if pending.generation != self.generation {
            return Err(ActionError::StaleAction);
        }
        self.validate(&pending.request)?;

        let report = match pending.request {
            ActionRequest::Place { slot, row, col } => {
                let block = self.slots.take(slot).ok_or(ActionError::EmptySlot { index: slot })?;
                self.board.place(&block, row, col);
                self.state.interaction = Interaction::Idle;
                tracing::debug!(slot, row, col, block = %block, "block placed");
                let report = self.score_turn();
                self.slots.replace(slot, self.generator.random_block());
                report
            }
            ActionRequest::ClearRow { row } => {
                self.board.clear_row(row);
                self.spend_board_action();
                tracing::debug!(row, "row cleared");
                TurnReport::default()
            }
            ActionRequest::ClearColumn { col } => {
                self.board.clear_column(col);
                self.spend_board_action();
                tracing::debug!(col, "column cleared");
                TurnReport::default()
            }
            ActionRequest::Swap { first, second } => {
                self.board.swap(first, second);
                self.spend_board_action();
                tracing::debug!(%first, %second, "letters swapped");
                self.score_turn()
            }
        };
        Ok(TurnReport {
            game_over: self.check_game_over(),
            ..report
        })
    }

    /// Checks `request`'s preconditions and returns the cells it affects.
    fn validate(&self, request: &ActionRequest) -> Result<Vec<CellPos>, ActionError> {
        self.ensure_playing()?;
        if let Some(mode) = request.mode() {
            if self.state.active_mode() != Some(mode) {
                return Err(ActionError::ModeNotActive { mode });
            }
            if self.state.board_actions == 0 {
                return Err(ActionError::NoBoardActionsLeft);
            }
        }

        match *request {
            ActionRequest::Place { slot, row, col } => {
                let block = self.occupied_slot(slot)?;
                if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
                    return Err(PlacementError::OutOfBounds { row, col }.into());
                }
                self.board.check_placement(block, row, col)?;
                Ok(block
                    .filled_cells()
                    .map(|(r, c, _)| CellPos::new(row + r, col + c))
                    .collect())
            }
            ActionRequest::ClearRow { row } => {
                if row >= BOARD_HEIGHT {
                    return Err(ActionError::LineOutOfRange { index: row });
                }
                if !self.board.row_has_letters(row) {
                    return Err(ActionError::EmptyLine);
                }
                Ok(self
                    .board
                    .occupied_positions()
                    .filter(|pos| pos.row == row)
                    .collect())
            }
            ActionRequest::ClearColumn { col } => {
                if col >= BOARD_WIDTH {
                    return Err(ActionError::LineOutOfRange { index: col });
                }
                if !self.board.column_has_letters(col) {
                    return Err(ActionError::EmptyLine);
                }
                Ok(self
                    .board
                    .occupied_positions()
                    .filter(|pos| pos.col == col)
                    .collect())
            }
            ActionRequest::Swap { first, second } => {
                for pos in [first, second] {
                    if CellPos::checked(pos.row, pos.col).is_none() {
                        return Err(ActionError::CellOutOfRange {
                            row: pos.row,
                            col: pos.col,
                        });
                    }
                }
                if first == second {
                    return Err(ActionError::SameCell);
                }
                for pos in [first, second] {
                    if self.board.cell(pos).is_none() {
                        return Err(ActionError::EmptyCell { pos });
                    }
                }
                Ok(vec![first, second])
            }
        }
    }

    fn spend_board_action(&mut self) {
        self.state.board_actions -= 1;
        self.state.interaction = Interaction::Idle;
    }

    /// Scans the board, clears matched words, and awards points and resources.
    fn score_turn(&mut self) -> TurnReport {
        let matches = scan(&self.board, &self.dictionary);
        let score = score_matches(&mut self.board, &matches);
        self.state.score = self.state.score.saturating_add(score.points);
        let rewards = Rewards::for_points(score.points, &self.config);
        if score.points > 0 {
            self.state.scored_words.extend(score.words.iter().cloned());
            self.state.discards += rewards.discards;
            self.state.board_actions += rewards.board_actions;
            tracing::debug!(
                words = ?score.words,
                points = score.points,
                discards_gained = rewards.discards,
                board_actions_gained = rewards.board_actions,
                "turn scored"
            );
        }
        TurnReport {
            words: score.words,
            points: score.points,
            cleared: score.cleared,
            rewards,
            game_over: None,
        }
    }

    fn check_game_over(&mut self) -> Option<GameOver> {
        if !is_game_over(&self.board, &self.slots) {
            return None;
        }
        let outcome = self.state.finish();
        tracing::info!(score = self.state.score, high_score = self.state.high_score, "{outcome}");
        Some(outcome)
    }
}
