//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `position` is `(cursor, total)` once a ledger exists.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: Option<(usize, usize)>,
    is_error: bool,
    is_playing: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let step_text = match position {
        Some((cursor, total)) => format!(" Step {}/{} ", cursor + 1, total),
        None => " No run ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (key, desc) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" ↵ ", " run "),
        (" a ", " array "),
        (" m ", " mode "),
        (" r ", " reset "),
        (" q ", " quit "),
    ] {
        if !right_spans.is_empty() {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    // Show status indicators based on position and state
    let is_at_start = position.is_some_and(|(cursor, _)| cursor == 0);
    let is_at_end = position.is_some_and(|(cursor, total)| cursor + 1 >= total);

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" ▶ PLAYING ", DEFAULT_THEME.secondary));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" END ", DEFAULT_THEME.error));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" START ", DEFAULT_THEME.success));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
