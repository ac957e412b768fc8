//! Keypad pane: clickable calculator buttons
//!
//! Buttons are laid out from [`KEYPAD_ROWS`] on every render. The resulting
//! [`Button`] rectangles are handed back to the app so a mouse click can be
//! mapped to the button under the pointer and decoded through its label.

use crate::input::{decode_label, Input, Symbol};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns per keypad row
const COLUMNS: u32 = 4;

/// Button labels per row, with the number of columns each one spans
pub const KEYPAD_ROWS: [&[(&str, u32)]; 5] = [
    &[("C", 2), ("←", 1), ("÷", 1)],
    &[("7", 1), ("8", 1), ("9", 1), ("×", 1)],
    &[("4", 1), ("5", 1), ("6", 1), ("−", 1)],
    &[("1", 1), ("2", 1), ("3", 1), ("+", 1)],
    &[("0", 3), ("=", 1)],
];

/// A button placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub input: Input,
    pub area: Rect,
}

impl Button {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

/// Place every keypad button inside `area`
pub fn layout_keypad(area: Rect) -> Vec<Button> {
    let row_count = KEYPAD_ROWS.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD_ROWS.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    KEYPAD_ROWS
        .iter()
        .zip(rows.iter())
        .flat_map(|(keys, row_area)| {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(keys.iter().map(|(_, span)| Constraint::Ratio(*span, COLUMNS)))
                .split(*row_area);

            keys.iter()
                .zip(cells.iter())
                .filter_map(|((label, _), cell)| {
                    decode_label(label).ok().map(|input| Button {
                        label: *label,
                        input,
                        area: *cell,
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Find the button under a pointer position
pub fn hit_test(buttons: &[Button], column: u16, row: u16) -> Option<&Button> {
    buttons.iter().find(|b| b.contains(column, row))
}

/// Render the keypad and return the placed buttons.
///
/// `pressed` is highlighted so clicks and key presses give visible feedback.
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, pressed: Option<Input>) -> Vec<Button> {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = layout_keypad(inner);
    for button in &buttons {
        let fg = match button.input {
            Input::Digit(_) => DEFAULT_THEME.digit,
            Input::Symbol(Symbol::Clear) => DEFAULT_THEME.error,
            Input::Symbol(Symbol::Backspace) => DEFAULT_THEME.comment,
            Input::Symbol(Symbol::Equals) => DEFAULT_THEME.success,
            Input::Symbol(Symbol::Op(_)) => DEFAULT_THEME.primary,
        };
        let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        if pressed == Some(button.input) {
            style = style.bg(DEFAULT_THEME.pressed_bg);
        }

        // Center the label vertically inside the button border
        let padding_top = button.area.height.saturating_sub(3) / 2;
        let text = format!("{}{}", "\n".repeat(padding_top as usize), button.label);

        let widget = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
            );
        frame.render_widget(widget, button.area);
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_every_button() {
        let buttons = layout_keypad(Rect::new(0, 0, 40, 20));
        assert_eq!(buttons.len(), 17);
        for pair in buttons.windows(2) {
            assert_ne!(pair[0].input, pair[1].input);
        }
    }

    #[test]
    fn test_hit_test() {
        let buttons = layout_keypad(Rect::new(0, 0, 40, 20));

        // top-left corner is the wide clear button
        let clear = hit_test(&buttons, 1, 1).unwrap();
        assert_eq!(clear.input, Input::CLEAR);

        // bottom-right corner is equals
        let equals = hit_test(&buttons, 39, 19).unwrap();
        assert_eq!(equals.input, Input::EQUALS);

        // bottom-left is the wide zero
        let zero = hit_test(&buttons, 0, 19).unwrap();
        assert_eq!(zero.input, Input::digit(0).unwrap());

        assert!(hit_test(&buttons, 40, 0).is_none());
    }
}
