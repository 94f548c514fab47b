use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, key_binding_display::*, session_display::*,
    slot_display::*, status_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod session_display;
mod slot_display;
mod status_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(48, 48, 48);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const DIM: Style = fg_bg(color::GRAY, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const LETTER: Style = fg_bg(color::BLACK, color::WHITE).add_modifier(Modifier::BOLD);
    pub const CURSOR: Style = fg_bg(color::BLACK, color::CYAN).add_modifier(Modifier::BOLD);
    pub const PENDING: Style = fg_bg(color::BLACK, color::ORANGE).add_modifier(Modifier::BOLD);
    pub const SWAP_ANCHOR: Style = fg_bg(color::BLACK, color::MAGENTA).add_modifier(Modifier::BOLD);
    pub const PREVIEW_OK: Style = fg_bg(color::BLACK, color::GREEN).add_modifier(Modifier::BOLD);
    pub const PREVIEW_BLOCKED: Style = fg_bg(color::WHITE, color::RED).add_modifier(Modifier::BOLD);
    pub const SLOT_EMPTY: Style = fg_bg(color::DARK_GRAY, color::BLACK);

    pub const BORDER: Color = color::WHITE;
    pub const BORDER_SELECTED: Color = color::YELLOW;
    pub const BORDER_MODE: Color = color::MAGENTA;
    pub const BORDER_GAME_OVER: Color = color::RED;
    pub const MESSAGE_INFO: Style = fg_bg(color::GREEN, color::BLACK);
    pub const MESSAGE_ERROR: Style = fg_bg(color::RED, color::BLACK);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
