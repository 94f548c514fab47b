use ratatui::{
    prelude::{Buffer, Rect},
    widgets::{Block as BlockWidget, Widget},
};
use wordgrid_engine::{BOARD_HEIGHT, BOARD_WIDTH, Block, Board, CellPos};

use crate::ui::widgets::{self, CellDisplay, style};

/// The 9×9 letter grid with cursor, previews, and action highlights.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    cursor: Option<CellPos>,
    preview: Option<&'a Block>,
    swap_anchor: Option<CellPos>,
    pending: &'a [CellPos],
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            preview: None,
            swap_anchor: None,
            pending: &[],
            block: None,
        }
    }

    pub fn cursor(self, cursor: CellPos) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    /// Shows `block` at the cursor, colored by whether it fits there.
    pub fn preview(self, block: Option<&'a Block>) -> Self {
        Self {
            preview: block,
            ..self
        }
    }

    pub fn swap_anchor(self, swap_anchor: Option<CellPos>) -> Self {
        Self {
            swap_anchor,
            ..self
        }
    }

    /// Cells an action is about to change.
    pub fn pending(self, pending: &'a [CellPos]) -> Self {
        Self { pending, ..self }
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
        CellDisplay::width() * BOARD_WIDTH as u16 + margin
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        let margin = widgets::block_vertical_margin(self.block.as_ref());
        CellDisplay::height() * BOARD_HEIGHT as u16 + margin
    }

    fn cell_display(&self, pos: CellPos) -> CellDisplay {
        let display = CellDisplay::from_cell(self.board.cell(pos));
        if self.pending.contains(&pos) {
            return display.with_style(style::PENDING);
        }
        if self.swap_anchor == Some(pos) {
            return display.with_style(style::SWAP_ANCHOR);
        }
        if let (Some(cursor), Some(block)) = (self.cursor, self.preview) {
            let fits = self.board.can_place(block, cursor.row, cursor.col);
            let covering = block.filled_cells().find(|&(row, col, _)| {
                cursor.row + row == pos.row && cursor.col + col == pos.col
            });
            if let Some((_, _, letter)) = covering {
                let style = if fits {
                    style::PREVIEW_OK
                } else {
                    style::PREVIEW_BLOCKED
                };
                return CellDisplay::new(style, letter.as_char());
            }
        }
        if self.cursor == Some(pos) {
            return display.with_style(style::CURSOR);
        }
        display
    }

    #[expect(clippy::cast_possible_truncation)]
    fn cell_area(inner: Rect, pos: CellPos) -> Rect {
        Rect::new(
            inner.x + pos.col as u16 * CellDisplay::width(),
            inner.y + pos.row as u16 * CellDisplay::height(),
            CellDisplay::width(),
            CellDisplay::height(),
        )
        .intersection(inner)
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        for pos in Board::positions() {
            let cell_area = BoardDisplay::cell_area(inner, pos);
            if cell_area.is_empty() {
                continue;
            }
            self.cell_display(pos).render(cell_area, buf);
        }
    }
}
