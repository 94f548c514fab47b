use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use wordgrid_engine::Cell;

use crate::ui::widgets::style;

/// One board or block cell: a letter on a tile, or a dot for an empty cell.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: String,
}

impl CellDisplay {
    pub fn new(style: Style, symbol: impl Into<String>) -> Self {
        Self {
            style,
            symbol: symbol.into(),
        }
    }

    pub fn width() -> u16 {
        3
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Some(letter) => Self::new(style::LETTER, letter.as_char()),
            None => Self::new(style::EMPTY_DOT, "."),
        }
    }

    /// Keeps the symbol but draws it with `style`.
    #[must_use]
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol.as_str())
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
