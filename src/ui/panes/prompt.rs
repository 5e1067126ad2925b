//! One-line text entry shown while the app is collecting input

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_prompt_pane(frame: &mut Frame, area: Rect, title: &str, hint: &str, buffer: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(super::border_style(true));

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", hint),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "█",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
