//! Reference code pane with syntax highlighting
//!
//! Shows the catalog's code sample for the selected algorithm. The pane uses
//! a simple character-by-character tokenizer to colour keywords, types,
//! numbers and comments without a full lexer.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for Rust-like code
fn highlight_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte_idx, c) = chars[i];

        // Line comments run to the end of the line
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                &line[byte_idx..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_call = c == '(';
                let style = word_style(&current_word, is_call);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
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

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "i64" | "usize" | "isize" | "f64" | "bool" | "Option" | "Some" | "None" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "fn" | "let" | "mut" | "for" | "in" | "while" | "if" | "else" | "return" | "break"
        | "as" | "loop" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the code pane; `scroll_offset` is clamped to the sample's length
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    code: &str,
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
        .title(" Implementation ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_code(line).spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_comment_swallows_rest_of_line() {
        let line = highlight_code("x // swap here");
        let parts = texts(&line);
        assert_eq!(parts.last().map(String::as_str), Some("// swap here"));
    }

    #[test]
    fn test_keywords_and_calls_are_styled() {
        let line = highlight_code("let y = f(1);");
        assert_eq!(line.spans[0].content, "let");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        let call = line
            .spans
            .iter()
            .find(|s| s.content == "f")
            .expect("call span");
        assert_eq!(call.style.fg, Some(DEFAULT_THEME.function));
    }
}
