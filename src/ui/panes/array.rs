//! Array pane: the working array with its pointer markers
//!
//! Three rows per step: indices, values (the active span shaded), and the
//! marker labels under the cells they point at. Markers may point one past
//! the end (an exclusive `hi`, a past-the-end answer), so the row extends
//! with empty cells as needed. Arrays wider than the pane scroll to keep the
//! leftmost marker in view.

use super::utils::{center, pane_block, render_placeholder};
use super::TraceRenderData;
use crate::model::Marker;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render one trace's array
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: &TraceRenderData) {
    let title = match data.index {
        Some(i) => format!(" {} · step {}/{} ", data.title, i + 1, data.len),
        None => format!(" {} ", data.title),
    };
    let block = pane_block(title, data.is_active);

    let Some(step) = data.step else {
        render_placeholder(frame, area, block);
        return;
    };

    let array = step.array();
    let markers = step.markers();
    let span = step.span();
    let labels = marker_labels(array.len(), &markers);
    let cells = labels.len();

    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .chain(array.iter().map(|v| v.to_string().len()))
        .chain(std::iter::once(cells.to_string().len()))
        .max()
        .unwrap_or(1)
        + 2;
    let visible = (area.width.saturating_sub(2) as usize / width).max(1);
    let first = first_visible(cells, visible, &markers);

    let mut index_spans = Vec::new();
    let mut value_spans = Vec::new();
    let mut marker_spans = Vec::new();

    for (i, label) in labels.iter().enumerate().skip(first).take(visible) {
        index_spans.push(Span::styled(
            center(&i.to_string(), width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        let text = array.get(i).map_or_else(|| "·".to_string(), |v| v.to_string());
        let mut style = Style::default().fg(DEFAULT_THEME.number);
        if span.is_some_and(|(lo, hi)| lo <= i && i <= hi) {
            style = style.bg(DEFAULT_THEME.span_bg);
        }
        if !label.is_empty() {
            style = style.add_modifier(Modifier::BOLD);
        }
        value_spans.push(Span::styled(center(&text, width), style));

        marker_spans.push(Span::styled(
            center(label, width),
            Style::default()
                .fg(DEFAULT_THEME.marker)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(index_spans),
        Line::from(value_spans),
        Line::from(marker_spans),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Labels per cell, `/`-joined where markers share an index
fn marker_labels(len: usize, markers: &[Marker]) -> Vec<String> {
    let cells = markers
        .iter()
        .map(|m| m.index + 1)
        .max()
        .unwrap_or(0)
        .max(len);

    let mut labels = vec![String::new(); cells];
    for marker in markers {
        let label = &mut labels[marker.index];
        if !label.is_empty() {
            label.push('/');
        }
        label.push_str(marker.label);
    }
    labels
}

fn first_visible(cells: usize, visible: usize, markers: &[Marker]) -> usize {
    if cells <= visible {
        return 0;
    }
    let focus = markers.iter().map(|m| m.index).min().unwrap_or(0);
    focus.saturating_sub(visible / 3).min(cells - visible)
}
