use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use wordgrid_engine::{CellPos, GameSession, SessionSnapshot};

use crate::ui::widgets::{BoardDisplay, SlotsDisplay, StatusDisplay, style};

/// Full game screen: status, board, and slots side by side.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    snapshot: SessionSnapshot,
    cursor: CellPos,
    pending: &'a [CellPos],
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession, cursor: CellPos) -> Self {
        Self {
            session,
            snapshot: session.snapshot(),
            cursor,
            pending: &[],
        }
    }

    pub fn pending(self, pending: &'a [CellPos]) -> Self {
        Self { pending, ..self }
    }

    pub fn height(&self) -> u16 {
        SlotsDisplay::height()
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let snapshot = &self.snapshot;
        let border_style = if snapshot.is_game_over() {
            style::BORDER_GAME_OVER
        } else if snapshot.active_mode.is_some() {
            style::BORDER_MODE
        } else {
            style::BORDER
        };
        let board_title = match snapshot.active_mode {
            Some(mode) => format!("{} MODE", mode.to_string().to_uppercase()),
            None => "WORD GRID".to_owned(),
        };

        let preview = snapshot
            .selected_slot
            .and_then(|index| self.session.slots().get(index));
        let game_board = BoardDisplay::new(&snapshot.board)
            .cursor(self.cursor)
            .preview(preview)
            .swap_anchor(snapshot.swap_anchor)
            .pending(self.pending)
            .block(
                Block::bordered()
                    .title(Line::from(board_title).centered())
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let status = StatusDisplay::new(snapshot).block(
            Block::bordered()
                .title(Line::from("STATUS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let slots = SlotsDisplay::new(&snapshot.slots, snapshot.selected_slot);

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(status.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(SlotsDisplay::width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [status_area] =
            Layout::vertical([Constraint::Length(status.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [slots_area] =
            Layout::vertical([Constraint::Length(SlotsDisplay::height())]).areas(right_column);

        let game_board_width = game_board.width();
        status.render(status_area, buf);
        game_board.render(board_area, buf);
        slots.render(slots_area, buf);

        if let Some(message) = &snapshot.message {
            let block = Block::new().style(style::GAME_OVER);
            let text = Text::styled(message.as_str(), style::GAME_OVER).centered();
            let popup_width = u16::try_from(message.len() + 4)
                .unwrap_or(u16::MAX)
                .max(game_board_width);
            let area = area.centered(Constraint::Length(popup_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
