//! Compiler output pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn line_style(line: &str) -> Style {
    match line {
        "ERRORS" => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        "WARNINGS" => Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
        "SYMBOL TABLE" => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        _ if line.starts_with("Type Error")
            || line.starts_with("Redeclaration")
            || line.starts_with("Expected")
            || line.starts_with("Invalid")
            || line.starts_with("Unexpected") =>
        {
            Style::default().fg(DEFAULT_THEME.error)
        }
        _ if line.starts_with("Undeclared") => Style::default().fg(DEFAULT_THEME.secondary),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the compiler output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
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
        .title(" COMPILER OUTPUT ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output, press F5 to compile)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = output
        .lines()
        .map(|line| ListItem::new(line).style(line_style(line)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
