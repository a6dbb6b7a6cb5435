//! Title bar and status bar rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar with the compile/clear key hints
pub fn render_title_bar(frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " ESAL COMPILER IDE ",
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(title, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.primary).fg(Color::White);
    let clear_style = Style::default().bg(DEFAULT_THEME.border_normal).fg(Color::White);
    let gap = Span::raw(" ");

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled(" F6 Clear ", clear_style),
        gap.clone(),
        Span::styled(" F5 ▶ Compile ", key_style.add_modifier(Modifier::BOLD)),
        gap,
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(buttons, layout[1]);
}

/// Render the status bar at the bottom.
///
/// `counts` is `(errors, warnings)` of the last compile, `None` before the first one.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    counts: Option<(usize, usize)>,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = match counts {
        Some((0, 0)) => DEFAULT_THEME.success,
        Some((0, _)) => DEFAULT_THEME.secondary,
        Some(_) => DEFAULT_THEME.error,
        None => DEFAULT_THEME.keyword,
    };
    let badge = match counts {
        Some((errors, warnings)) => format!(" E:{} W:{} ", errors, warnings),
        None => " READY ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
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

    let right_spans = vec![
        Span::styled(" Tab ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" PgUp/PgDn ", key_style),
        Span::styled(" scroll output ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" Esc ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
