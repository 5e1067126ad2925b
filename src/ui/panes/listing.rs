//! Code listing pane with syntax highlighting
//!
//! Shows the static listing of the algorithm that produced the current step,
//! followed by that step's action line. The action is the part that changes
//! from step to step, so it is drawn on the current-line background.

use crate::step::{Outcome, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Simple syntax highlighting for the C-like listings
fn highlight_listing_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to the end of the line
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(');
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "void" => Style::default().fg(DEFAULT_THEME.type_name),
        "for" | "while" | "if" | "else" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

fn outcome_line(outcome: &Outcome) -> Line<'static> {
    let (text, color) = match outcome {
        Outcome::Sorted => ("Result: array sorted".to_string(), DEFAULT_THEME.success),
        Outcome::Found(index) => (
            format!("Result: target found at index {}", index),
            DEFAULT_THEME.success,
        ),
        Outcome::NotFound => ("Result: target not found".to_string(), DEFAULT_THEME.error),
        Outcome::Halted(reason) => (format!("Result: {}", reason), DEFAULT_THEME.error),
    };
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Render the listing pane.
///
/// `outcome` is only passed once the cursor sits on the last step.
pub fn render_listing_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    outcome: Option<&Outcome>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Algorithm Code ")
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused));

    let Some(step) = step else {
        let paragraph = Paragraph::new("(run an algorithm to see its code)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines: Vec<Line> = step.listing.lines().map(highlight_listing_line).collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "▶ ",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            step.action.clone(),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ]));
    if let Some(outcome) = outcome {
        lines.push(outcome_line(outcome));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
