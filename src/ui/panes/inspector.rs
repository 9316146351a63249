//! Inspector pane: phase, operation count, family facts and explanation

use super::utils::{pane_block, render_placeholder};
use super::TraceRenderData;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_inspector_pane(frame: &mut Frame, area: Rect, data: &TraceRenderData) {
    let block = pane_block(format!(" {} · {} ", data.title, data.complexity), data.is_active);

    let Some(step) = data.step else {
        render_placeholder(frame, area, block);
        return;
    };

    let phase_style = if step.is_terminal() {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    };
    let label_style = Style::default().fg(DEFAULT_THEME.label);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", step.phase_label().to_uppercase()), phase_style),
        Span::styled("  ops ", label_style),
        Span::styled(step.operation_count().to_string(), value_style),
    ])];

    let facts: Vec<Span> = step
        .facts()
        .into_iter()
        .flat_map(|(name, value)| {
            [
                Span::styled(format!(" {} ", name), label_style),
                Span::styled(value, value_style),
            ]
        })
        .collect();
    lines.push(Line::from(facts));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {}", step.explanation()),
        value_style,
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
