//! Narration, metadata and colour legend pane

use super::bars::legend_roles;
use crate::catalog::{Algorithm, Run};
use crate::metrics::{estimate_operations, format_estimated_time};
use crate::trace::TraceStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the info pane
pub struct InfoRenderData<'a> {
    pub algorithm: Algorithm,
    pub run: &'a Run,
    pub description: &'a str,
    pub stats: &'a TraceStats,
    pub array_len: usize,
}

/// Render the info pane
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    data: InfoRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let info = data.algorithm.info();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            data.description.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let legend: Vec<Span> = legend_roles(data.run)
        .iter()
        .flat_map(|role| {
            [
                Span::styled("■ ", Style::default().fg(role.color())),
                Span::styled(format!("{}  ", role.label()), label),
            ]
        })
        .collect();
    lines.push(Line::from(legend));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(info.description, value)));
    lines.push(Line::from(Span::styled(info.explanation, label)));
    lines.push(Line::default());

    let complexity = info.time_complexity;
    lines.push(Line::from(vec![
        Span::styled("Time  ", label),
        Span::styled(
            format!(
                "best {} · average {} · worst {}",
                complexity.best, complexity.average, complexity.worst
            ),
            value,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Space ", label),
        Span::styled(info.space_complexity, value),
    ]));

    let estimate = estimate_operations(data.algorithm, data.array_len);
    lines.push(Line::from(vec![
        Span::styled("Estimate ", label),
        Span::styled(
            format!(
                "{} ops for n = {} (~{})",
                estimate,
                data.array_len,
                format_estimated_time(estimate)
            ),
            value,
        ),
    ]));

    let measured = match data.run {
        Run::Sort(_) => format!(
            "{} comparisons, {} swaps",
            data.stats.comparisons, data.stats.swaps
        ),
        Run::Search(_) => format!("{} probes", data.stats.probes),
    };
    lines.push(Line::from(vec![
        Span::styled("Trace    ", label),
        Span::styled(measured, value),
    ]));

    if let Some((idx, count)) = data.stats.hottest_index() {
        lines.push(Line::from(vec![
            Span::styled("Busiest  ", label),
            Span::styled(format!("position {} ({} highlights)", idx, count), value),
        ]));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
