//! Status bar rendering with keybindings and playback indicators

use crate::playback::PlaybackController;
use crate::session::ViewMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    controller: &PlaybackController,
    mode: ViewMode,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let total = controller.total_steps();
    let step_text = if total == 0 {
        " Step -/0 ".to_string()
    } else {
        format!(" Step {}/{} ", controller.current_index() + 1, total)
    };

    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} · {}x ", mode, controller.speed()), bar.fg(DEFAULT_THEME.label)),
        Span::styled("|", sep_style),
        Span::styled(format!(" {} ", message), bar.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);

    let mut right_spans = Vec::new();
    for (key, desc) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" ↵ / ⌫ ", " end/start "),
        (" +/- ", " speed "),
        (" ⇥ ", " mode "),
        (" [/] ", " param "),
        (" r/R ", " shuffle "),
        (" a ", " next "),
    ] {
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(" ", desc_style));
    }
    right_spans.push(Span::styled("q", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    let badge = if total == 0 {
        Some((" EMPTY ", DEFAULT_THEME.comment))
    } else if controller.is_playing() {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if controller.at_end() {
        Some((" END ", DEFAULT_THEME.error))
    } else if controller.current_index() == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
