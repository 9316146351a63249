//! Helpers shared by the panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered block; active panes get the highlighted border
pub(super) fn pane_block(title: String, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Explicit placeholder for an empty trace
pub(super) fn render_placeholder(frame: &mut Frame, area: Rect, block: Block<'_>) {
    let paragraph = Paragraph::new("(nothing to display)")
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.comment));
    frame.render_widget(paragraph, area);
}

/// Pad `text` to `width` columns, centered
pub(super) fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}
