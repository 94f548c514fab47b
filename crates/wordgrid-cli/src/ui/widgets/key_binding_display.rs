use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::widgets::color;

/// Keys that trigger an action, and a short description of it.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One centered line of key legends, e.g. `F Rotate | G Discard`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", ITEM_SEPARATOR_STYLE));
            }
            for (i, key) in keys.iter().copied().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("/", KEY_SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::from(" "));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

const KEY_STYLE: Style = Style::new().fg(color::CYAN);
const KEY_SEPARATOR_STYLE: Style = Style::new().fg(color::GRAY);
const DESCRIPTION_STYLE: Style = Style::new().fg(color::WHITE);
const ITEM_SEPARATOR_STYLE: Style = Style::new().fg(color::GRAY);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_text() {
        let bindings: &[KeyBinding] = &[(&["F"], "Rotate"), (&["E", "Esc"], "Cancel")];
        let line = KeyBindingDisplay::new(bindings).line();
        assert_eq!(line.to_string(), "F Rotate | E/Esc Cancel");
        assert_eq!(line.spans[0].style, KEY_STYLE);
        assert_eq!(line.spans[2].style, DESCRIPTION_STYLE);
    }
}
