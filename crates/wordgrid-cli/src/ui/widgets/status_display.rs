use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, Paragraph, Widget},
};
use wordgrid_engine::SessionSnapshot;

use crate::ui::widgets::{self, style};

const LABEL_WIDTH: usize = 9;
const VALUE_WIDTH: usize = 12;

/// Score, resources, active mode, and the most recent words.
#[derive(Debug)]
pub struct StatusDisplay<'a> {
    snapshot: &'a SessionSnapshot,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(snapshot: &'a SessionSnapshot) -> Self {
        Self {
            snapshot,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        let margin = widgets::block_horizontal_margin(self.block.as_ref());
        (LABEL_WIDTH + VALUE_WIDTH) as u16 + margin
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        let margin = widgets::block_vertical_margin(self.block.as_ref());
        self.lines().len() as u16 + margin
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let snapshot = self.snapshot;
        let mode = snapshot
            .active_mode
            .map_or_else(|| "-".to_owned(), |mode| mode.to_string().to_uppercase());
        let mut lines = vec![
            row("SCORE", snapshot.score.to_string()),
            row("HIGH", snapshot.high_score.to_string()),
            Line::default(),
            row("DISCARDS", snapshot.discards.to_string()),
            row("ACTIONS", snapshot.board_actions.to_string()),
            row("MODE", mode),
            Line::default(),
            row("WORDS", snapshot.scored_words.len().to_string()),
        ];
        if snapshot.recent_words.is_empty() {
            lines.push(Line::styled("  (none yet)", style::DIM));
        }
        for word in snapshot.recent_words.iter().rev() {
            lines.push(Line::styled(format!("  {word}"), style::DEFAULT));
        }
        lines
    }
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), style::DIM),
        Span::styled(format!("{value:>VALUE_WIDTH$}"), style::DEFAULT),
    ])
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut paragraph = Paragraph::new(self.lines()).style(style::DEFAULT);
        if let Some(block) = &self.block {
            paragraph = paragraph.block(block.clone());
        }
        paragraph.render(area, buf);
    }
}
