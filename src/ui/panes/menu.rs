//! Algorithm menu: mode switch plus the algorithms of that mode

use crate::algorithms::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the algorithm menu with `selected` marked
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let mode_span = |m: Mode| {
        if m == mode {
            Span::styled(
                format!(" {} ", m.label()),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" {} ", m.label()),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        }
    };

    let mut items = vec![
        ListItem::new(Line::from(vec![
            mode_span(Mode::Sorting),
            Span::raw(" "),
            mode_span(Mode::Searching),
        ])),
        ListItem::new(""),
    ];

    items.extend(mode.algorithms().iter().enumerate().map(|(i, algo)| {
        if i == selected {
            ListItem::new(format!("▶ {}", algo.name())).style(
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ListItem::new(format!("  {}", algo.name())).style(Style::default().fg(DEFAULT_THEME.fg))
        }
    }));

    frame.render_widget(List::new(items).block(block), area);
}
