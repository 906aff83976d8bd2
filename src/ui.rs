use ratatui::{prelude::*, widgets::*};

use crate::app::state::StatusKind;

/// Renders a single-line text input. Focused inputs get a yellow border.
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders a password input as bullets
pub fn render_secret<'a>(content: &str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let masked = "•".repeat(content.chars().count());
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(masked).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title),
    )
}

/// Renders a selectable list of plain lines
pub fn render_selectable<'a>(
    items: Vec<String>,
    title: &'a str,
    selected: Option<usize>,
    is_focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = items
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if is_focused && Some(i) == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let prefix = if Some(i) == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, text)).style(style)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Status line color
pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::Cyan,
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
    }
}

/// Bordered popup frame on a black background
pub fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black))
}
