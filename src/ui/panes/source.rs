//! Source editor pane rendering with syntax highlighting
//!
//! Highlighting reuses the real lexer one line at a time, so the colors match
//! exactly what the compiler will see. Characters the lexer drops stay
//! unstyled.

use crate::parser::lexer::{scan, TokenKind};
use crate::ui::editor::EditorBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the line-number gutter, including the trailing space
const GUTTER_WIDTH: u16 = 5;

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::ProgramStart => Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD),
        TokenKind::VarInt | TokenKind::Output => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        kind if kind.is_reserved() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Str => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::LParen | TokenKind::RParen | TokenKind::LBrace | TokenKind::RBrace => {
            Style::default().fg(DEFAULT_THEME.primary)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Highlight one source line using the lexer's token kinds
pub fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for token in scan(line) {
        if token.kind() == TokenKind::Eof {
            break;
        }
        // tokens come back in source order, separated only by skipped text
        let Some(offset) = line[cursor..].find(token.lexeme()) else {
            break;
        };
        let start = cursor + offset;
        let end = start + token.lexeme().len();

        if start > cursor {
            spans.push(Span::raw(&line[cursor..start]));
        }
        spans.push(Span::styled(&line[start..end], token_style(token.kind())));
        cursor = end;
    }

    if cursor < line.len() {
        spans.push(Span::raw(&line[cursor..]));
    }

    Line::from(spans)
}

/// Render the source editor pane and place the terminal cursor when focused
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &EditorBuffer,
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
        .title(" SOURCE CODE ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let (row, col) = buffer.cursor();

    // Keep the cursor row on screen
    if row < *scroll_offset {
        *scroll_offset = row;
    } else if row >= *scroll_offset + visible_height {
        *scroll_offset = row + 1 - visible_height;
    }

    let visible_lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let num_style = if idx == row {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(highlight_line(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x + 1 + GUTTER_WIDTH + col as u16;
        let y = area.y + 1 + (row - *scroll_offset) as u16;
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}
