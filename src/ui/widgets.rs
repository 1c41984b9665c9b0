//! Small building blocks shared by the page sections

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

use crate::theme::Theme;

/// Bordered block with a title; `card` blocks get the accent border
pub fn section_block(t: &Theme, title: &str, card: bool) -> Block<'static> {
    let (border_color, title_style) = if card {
        (t.accent, Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
    } else {
        (t.border, Style::default().fg(t.text_dim))
    };

    Block::default()
        .title(Span::styled(title.to_string(), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// "key label" pair as styled spans, with trailing spacing
pub fn key_hint<'a>(t: &Theme, key: &'a str, label: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, Style::default().fg(t.accent).add_modifier(Modifier::BOLD)),
        Span::styled(" ", Style::default()),
        Span::styled(label, Style::default().fg(t.text_dim)),
        Span::styled("  ", Style::default()),
    ]
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
