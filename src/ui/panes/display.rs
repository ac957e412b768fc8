//! Display pane: the calculator buffer, right-aligned

use crate::input::Operator;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display pane.
///
/// The pending operator glyph (if any) sits on the left edge so the user can
/// see which operation the next operand will feed.
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    pending: Option<Operator>,
    is_error: bool,
) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let glyph = pending.map(Operator::glyph).unwrap_or("");
    frame.render_widget(
        Paragraph::new(glyph).style(Style::default().fg(DEFAULT_THEME.secondary)),
        chunks[0],
    );

    let value_style = if is_error {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    // Keep the least significant digits visible when the number is too wide
    let width = chunks[1].width as usize;
    let len = text.chars().count();
    let visible: String = if width > 0 && len > width {
        text.chars().skip(len - width).collect()
    } else {
        text.to_string()
    };

    let value = Paragraph::new(visible)
        .style(value_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);
    frame.render_widget(value, chunks[1]);
}
