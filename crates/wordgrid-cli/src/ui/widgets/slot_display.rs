use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block as BlockWidget, Padding, Paragraph, Widget},
};
use wordgrid_engine::{BLOCK_MAX_SIDE, BlockSnapshot, SLOT_COUNT};

use crate::ui::widgets::{CellDisplay, style};

/// The three choosable slots, stacked vertically.
#[derive(Debug)]
pub struct SlotsDisplay<'a> {
    slots: &'a [Option<BlockSnapshot>; SLOT_COUNT],
    selected: Option<usize>,
}

impl<'a> SlotsDisplay<'a> {
    pub fn new(slots: &'a [Option<BlockSnapshot>; SLOT_COUNT], selected: Option<usize>) -> Self {
        Self { slots, selected }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn width() -> u16 {
        // borders + padding + cells
        2 + 2 + CellDisplay::width() * BLOCK_MAX_SIDE as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn panel_height() -> u16 {
        2 + CellDisplay::height() * BLOCK_MAX_SIDE as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn height() -> u16 {
        Self::panel_height() * SLOT_COUNT as u16
    }
}

impl Widget for SlotsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SlotsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let panels: [Rect; SLOT_COUNT] =
            Layout::vertical([Constraint::Length(SlotsDisplay::panel_height()); SLOT_COUNT])
                .areas(area);

        for (index, (slot, panel_area)) in self.slots.iter().zip(panels).enumerate() {
            let selected = self.selected == Some(index);
            let title = match slot {
                Some(block) => format!("{}: {}", index + 1, block.name),
                None => format!("{}: -", index + 1),
            };
            let border_style = if selected {
                style::BORDER_SELECTED
            } else {
                style::BORDER
            };
            let panel = BlockWidget::bordered()
                .title(Line::from(title))
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT);
            let inner = panel.inner(panel_area);
            panel.render(panel_area, buf);

            let Some(block) = slot else {
                Paragraph::new("(empty)")
                    .style(style::SLOT_EMPTY)
                    .render(inner, buf);
                continue;
            };
            render_block_rows(&block.rows, inner, buf);
        }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn render_block_rows(rows: &[String], area: Rect, buf: &mut Buffer) {
    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, c) in row.chars().enumerate() {
            let cell_area = Rect::new(
                area.x + col_index as u16 * CellDisplay::width(),
                area.y + row_index as u16 * CellDisplay::height(),
                CellDisplay::width(),
                CellDisplay::height(),
            )
            .intersection(area);
            if cell_area.is_empty() {
                continue;
            }
            let display = if c.is_ascii_uppercase() {
                CellDisplay::new(style::LETTER, c)
            } else {
                CellDisplay::new(style::DEFAULT, " ")
            };
            display.render(cell_area, buf);
        }
    }
}
