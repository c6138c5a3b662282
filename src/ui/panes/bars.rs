//! Array pane: one bar per element, coloured by its role in the current step
//!
//! Role precedence follows what the step is about: for sorting an exchange
//! beats a comparison, which beats the pivot, which beats "already sorted".
//! For searching a hit beats a probe, which beats the bounds.

use crate::catalog::Run;
use crate::trace::{SearchStep, SortStep};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// What an element is doing in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Idle,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
    Searching,
    Found,
    Mid,
    OutOfRange,
}

impl BarRole {
    pub fn color(self) -> Color {
        match self {
            BarRole::Idle => DEFAULT_THEME.bar,
            BarRole::Comparing => DEFAULT_THEME.comparing,
            BarRole::Swapping => DEFAULT_THEME.swapping,
            BarRole::Sorted => DEFAULT_THEME.sorted,
            BarRole::Pivot => DEFAULT_THEME.pivot,
            BarRole::Searching => DEFAULT_THEME.searching,
            BarRole::Found => DEFAULT_THEME.found,
            BarRole::Mid => DEFAULT_THEME.mid,
            BarRole::OutOfRange => DEFAULT_THEME.out_of_range,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BarRole::Idle => "unsorted",
            BarRole::Comparing => "comparing",
            BarRole::Swapping => "swapping",
            BarRole::Sorted => "sorted",
            BarRole::Pivot => "pivot",
            BarRole::Searching => "checking",
            BarRole::Found => "found",
            BarRole::Mid => "middle",
            BarRole::OutOfRange => "eliminated",
        }
    }
}

fn contains(indices: &Option<Vec<usize>>, idx: usize) -> bool {
    indices.as_ref().is_some_and(|set| set.contains(&idx))
}

pub fn sort_role(step: &SortStep, idx: usize) -> BarRole {
    if contains(&step.swapping, idx) {
        BarRole::Swapping
    } else if contains(&step.comparing, idx) {
        BarRole::Comparing
    } else if step.pivot == Some(idx) {
        BarRole::Pivot
    } else if contains(&step.sorted, idx) {
        BarRole::Sorted
    } else {
        BarRole::Idle
    }
}

pub fn search_role(step: &SearchStep, idx: usize) -> BarRole {
    if step.found == Some(idx) {
        return BarRole::Found;
    }
    if contains(&step.searching, idx) {
        return BarRole::Searching;
    }
    if step.mid == Some(idx) {
        return BarRole::Mid;
    }
    match (step.left, step.right) {
        (Some(left), Some(right)) if (idx as isize) < left || (idx as isize) > right => {
            BarRole::OutOfRange
        }
        _ => BarRole::Idle,
    }
}

/// Roles that can appear for this kind of run, in legend order
pub fn legend_roles(run: &Run) -> &'static [BarRole] {
    match run {
        Run::Sort(_) => &[
            BarRole::Idle,
            BarRole::Comparing,
            BarRole::Swapping,
            BarRole::Pivot,
            BarRole::Sorted,
        ],
        Run::Search(_) => &[
            BarRole::Idle,
            BarRole::Searching,
            BarRole::Mid,
            BarRole::OutOfRange,
            BarRole::Found,
        ],
    }
}

/// Data needed to render the array pane
pub struct BarsRenderData<'a> {
    pub run: &'a Run,
    pub position: usize,
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match data.run {
        Run::Search(run) => match run.steps.get(data.position) {
            Some(step) => format!(" {} · target {} ", run.name, step.target),
            None => format!(" {} ", run.name),
        },
        Run::Sort(run) => format!(" {} ", run.name),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let (values, roles): (Vec<i64>, Vec<BarRole>) = match data.run {
        Run::Sort(run) => match run.steps.get(data.position) {
            Some(step) => step
                .array
                .iter()
                .enumerate()
                .map(|(idx, &v)| (v, sort_role(step, idx)))
                .unzip(),
            None => (Vec::new(), Vec::new()),
        },
        Run::Search(run) => match run.steps.get(data.position) {
            Some(step) => step
                .array
                .iter()
                .enumerate()
                .map(|(idx, &v)| (v, search_role(step, idx)))
                .unzip(),
            None => (Vec::new(), Vec::new()),
        },
    };

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let gap = if values.len() * 2 <= inner_width { 1 } else { 0 };
    let bar_width = ((inner_width.saturating_sub(gap * values.len())) / values.len()).max(1);

    // Negative values have no height; their value text still shows them
    let bars: Vec<Bar> = values
        .iter()
        .zip(&roles)
        .enumerate()
        .map(|(idx, (&value, role))| {
            let style = Style::default().fg(role.color());
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(style)
                .value_style(Style::default().fg(Color::Black).bg(role.color()))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width as u16)
        .bar_gap(gap as u16)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_outranks_sorted() {
        let step = SortStep::new(&[1, 2, 3], "s")
            .swapping([0, 1])
            .sorted([1, 2]);
        assert_eq!(sort_role(&step, 1), BarRole::Swapping);
        assert_eq!(sort_role(&step, 2), BarRole::Sorted);
    }

    #[test]
    fn test_pivot_shown_when_not_compared() {
        let step = SortStep::new(&[1, 2, 3], "s").comparing([0]).pivot(2);
        assert_eq!(sort_role(&step, 0), BarRole::Comparing);
        assert_eq!(sort_role(&step, 1), BarRole::Idle);
        assert_eq!(sort_role(&step, 2), BarRole::Pivot);
    }

    #[test]
    fn test_search_window_dims_outside_bounds() {
        let step = SearchStep::new(&[1, 2, 3, 4, 5], 4, "s")
            .bounds(2, 4)
            .mid(3)
            .searching([3]);
        assert_eq!(search_role(&step, 0), BarRole::OutOfRange);
        assert_eq!(search_role(&step, 2), BarRole::Idle);
        assert_eq!(search_role(&step, 3), BarRole::Searching);

        let hit = SearchStep::new(&[1, 2, 3, 4, 5], 4, "s").found(3);
        assert_eq!(search_role(&hit, 3), BarRole::Found);
        assert_eq!(search_role(&hit, 0), BarRole::Idle);
    }
}
