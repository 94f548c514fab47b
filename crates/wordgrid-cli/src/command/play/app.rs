use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};
use wordgrid_engine::{
    ActionError, BOARD_HEIGHT, BOARD_WIDTH, CellClick, CellPos, ErrorCategory, GameSession,
    ModeKind, PendingAction, TurnReport,
};

use crate::{
    store::HighScoreStore,
    tui::{App, Tui},
    ui::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay, style},
};

const TICK_RATE: f64 = 30.0;
/// How long the affected cells are highlighted before a board action applies.
const ACTION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
enum Feedback {
    Info(String),
    Error(String),
}

#[derive(Debug)]
struct Animation {
    pending: PendingAction,
    deadline: Instant,
}

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    store: HighScoreStore,
    cursor: CellPos,
    animation: Option<Animation>,
    feedback: Option<Feedback>,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession, store: HighScoreStore) -> Self {
        Self {
            session,
            store,
            cursor: CellPos::new(0, 0),
            animation: None,
            feedback: None,
            is_exiting: false,
        }
    }

    fn handle_key(&mut self, tui: &mut Tui, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.is_exiting = true;
            return;
        }
        if key.code == KeyCode::Char('x') {
            self.is_exiting = true;
            return;
        }
        // Input waits until the pending board action has been applied.
        if self.animation.is_some() {
            return;
        }

        match key.code {
            KeyCode::Char('1') => self.select_slot(0),
            KeyCode::Char('2') => self.select_slot(1),
            KeyCode::Char('3') => self.select_slot(2),
            KeyCode::Char('f') => {
                let result = self.session.rotate_selected();
                self.apply(result);
            }
            KeyCode::Char('g') => {
                let result = self.session.discard_selected();
                self.apply(result);
            }
            KeyCode::Char('q') => self.toggle_mode(ModeKind::ClearRow),
            KeyCode::Char('w') => self.toggle_mode(ModeKind::ClearColumn),
            KeyCode::Char('e') => self.toggle_mode(ModeKind::Swap),
            KeyCode::Char('r') => {
                self.session.restart();
                self.feedback = None;
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(tui),
            KeyCode::Esc => {
                if self.session.exit_mode().is_none() {
                    self.session.clear_selection();
                }
                self.feedback = None;
            }
            _ => {}
        }
    }

    fn select_slot(&mut self, index: usize) {
        self.feedback = None;
        let result = self.session.select_slot(index);
        self.apply(result);
    }

    fn toggle_mode(&mut self, mode: ModeKind) {
        self.feedback = None;
        let result = self.session.toggle_mode(mode);
        self.apply(result);
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self
            .cursor
            .row
            .saturating_add_signed(d_row)
            .min(BOARD_HEIGHT - 1);
        let col = self
            .cursor
            .col
            .saturating_add_signed(d_col)
            .min(BOARD_WIDTH - 1);
        self.cursor = CellPos::new(row, col);
    }

    /// Places the selected block or clicks the cell under the cursor.
    fn activate(&mut self, tui: &mut Tui) {
        let CellPos { row, col } = self.cursor;
        if self.session.state().active_mode().is_none() {
            let result = self.session.place_selected(row, col);
            self.apply_turn(result);
            return;
        }
        match self.session.click_cell(row, col) {
            Ok(CellClick::Ready(pending)) => {
                self.animation = Some(Animation {
                    pending,
                    deadline: Instant::now() + ACTION_DELAY,
                });
                tui.set_tick_rate(TICK_RATE);
            }
            Ok(CellClick::SwapAnchorSet(pos)) => {
                self.feedback = Some(Feedback::Info(format!(
                    "Swapping {pos}: pick another letter."
                )));
            }
            Ok(CellClick::SwapAnchorCleared | CellClick::Ignored) => self.feedback = None,
            Err(e) => self.show_error(&e),
        }
    }

    fn apply(&mut self, result: Result<(), ActionError>) {
        if let Err(e) = result {
            self.show_error(&e);
        }
        self.save_high_score();
    }

    fn apply_turn(&mut self, result: Result<TurnReport, ActionError>) {
        match result {
            Ok(report) => {
                tracing::debug!(points = report.points, words = ?report.words, "turn finished");
                self.feedback = report.message().map(Feedback::Info);
            }
            Err(e) => self.show_error(&e),
        }
        self.save_high_score();
    }

    fn show_error(&mut self, error: &ActionError) {
        match error.category() {
            ErrorCategory::InvalidIntent => {
                tracing::debug!(%error, "intent ignored");
            }
            ErrorCategory::IllegalPlacement | ErrorCategory::ResourceExhausted => {
                self.feedback = Some(Feedback::Error(error.to_string()));
            }
        }
    }

    fn save_high_score(&mut self) {
        let high_score = self.session.state().high_score;
        if high_score <= self.store.high_score() {
            return;
        }
        if let Err(e) = self.store.save_high_score(high_score) {
            tracing::error!(error = %format!("{e:#}"), "failed to save high score");
            self.feedback = Some(Feedback::Error(format!(
                "Could not save the high score to {}",
                self.store.path().display()
            )));
        }
    }

    fn key_bindings(&self) -> &'static [KeyBinding<'static>] {
        let state = self.session.state();
        if self.animation.is_some() {
            &[(&["X"], "Quit")]
        } else if state.is_game_over() {
            &[(&["R"], "Restart"), (&["X"], "Quit")]
        } else if state.interaction.swap_anchor().is_some() {
            &[
                (&["←↑↓→"], "Move"),
                (&["Enter"], "Swap with first letter"),
                (&["E", "Esc"], "Cancel"),
                (&["X"], "Quit"),
            ]
        } else if state.active_mode().is_some() {
            &[
                (&["←↑↓→"], "Move"),
                (&["Enter"], "Apply"),
                (&["Q", "W", "E"], "Toggle mode"),
                (&["Esc"], "Cancel"),
                (&["X"], "Quit"),
            ]
        } else if state.interaction.selected_slot().is_some() {
            &[
                (&["←↑↓→"], "Move"),
                (&["Enter"], "Place"),
                (&["F"], "Rotate"),
                (&["G"], "Discard"),
                (&["Esc"], "Deselect"),
                (&["X"], "Quit"),
            ]
        } else {
            &[
                (&["1", "2", "3"], "Select block"),
                (&["Q"], "Clear row"),
                (&["W"], "Clear column"),
                (&["E"], "Swap"),
                (&["R"], "Restart"),
                (&["X"], "Quit"),
            ]
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(None);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        if let Some(key) = event.as_key_press_event() {
            self.handle_key(tui, key);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let pending = self
            .animation
            .as_ref()
            .map_or(&[][..], |animation| animation.pending.affected.as_slice());
        let session_display = SessionDisplay::new(&self.session, self.cursor).pending(pending);

        let feedback = match &self.feedback {
            Some(Feedback::Info(text)) => Text::styled(text.as_str(), style::MESSAGE_INFO),
            Some(Feedback::Error(text)) => Text::styled(text.as_str(), style::MESSAGE_ERROR),
            None => Text::default(),
        }
        .centered();
        let key_bindings = KeyBindingDisplay::new(self.key_bindings());

        let [main_area, feedback_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(feedback, feedback_area);
        frame.render_widget(key_bindings, help_area);
    }

    fn update(&mut self, tui: &mut Tui) {
        let Some(animation) = self.animation.take_if(|a| a.deadline <= Instant::now()) else {
            return;
        };
        tui.set_tick_interval(None);
        let result = self.session.commit_action(animation.pending);
        self.apply_turn(result);
    }
}
