//! Comparison stats pane

use super::utils::pane_block;
use crate::comparison::ComparisonStats;
use crate::config::SimulationConfig;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    config: &SimulationConfig,
    stats: &ComparisonStats,
) {
    let algorithm = config.algorithm;
    let title = format!(" {} · {} ", algorithm, algorithm.family());
    let block = pane_block(title, false);

    let label_style = Style::default().fg(DEFAULT_THEME.label);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);
    let comment_style = Style::default().fg(DEFAULT_THEME.comment);

    let input = config
        .input
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let mut input_line = vec![
        Span::styled(" input ", label_style),
        Span::styled(format!("[{}]", input), value_style),
    ];
    if let Some(param) = config.describe_param() {
        input_line.push(Span::styled("  ", value_style));
        input_line.push(Span::styled(param, value_style));
    }

    let complexity = algorithm.complexity();
    let gain_style = Style::default()
        .fg(if stats.optimal_wins() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        })
        .add_modifier(Modifier::BOLD);

    let counts_line = vec![
        Span::styled(" brute force ", label_style),
        Span::styled(
            format!("{} steps ({} ops) ", stats.brute_force_steps, stats.brute_force_ops),
            value_style,
        ),
        Span::styled(complexity.brute_force, comment_style),
        Span::styled("   optimal ", label_style),
        Span::styled(
            format!("{} steps ({} ops) ", stats.optimal_steps, stats.optimal_ops),
            value_style,
        ),
        Span::styled(complexity.optimal, comment_style),
        Span::styled("   saved ", label_style),
        Span::styled(
            format!("{} steps, {}%", stats.saved_ops, stats.efficiency_gain),
            gain_style,
        ),
    ];

    let paragraph = Paragraph::new(vec![Line::from(input_line), Line::from(counts_line)]).block(block);
    frame.render_widget(paragraph, area);
}
