//! Bar chart of the array under the cursor

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width of one bar given the inner pane width and the number of bars.
///
/// Each bar leaves one column of gap; widths are clamped to 1..=9.
fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let per_bar = inner_width as usize / count;
    per_bar.saturating_sub(1).clamp(1, 9) as u16
}

/// Render the visualizer pane.
///
/// Negative values are drawn as empty bars; their value label still shows the
/// real number.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    highlights: (Option<usize>, Option<usize>),
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Visualizer ")
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused));

    if values.is_empty() {
        let paragraph = Paragraph::new("(no array set: press 'a')")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let max = values.iter().copied().max().unwrap_or(1).max(1) as u64;
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let is_highlighted = highlights.0 == Some(i) || highlights.1 == Some(i);
            let color = if is_highlighted {
                DEFAULT_THEME.bar_highlight
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, values.len()))
        .bar_gap(1)
        .max(max);

    frame.render_widget(chart, area);
}
