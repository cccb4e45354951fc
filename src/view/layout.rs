//! Top bar rendering (search input and scope selector)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{SearchController, SearchScope};

pub fn render_top_bar(frame: &mut Frame, area: Rect, search: &SearchController) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(34), // Scope tabs
        ])
        .split(area);

    let (search_text, search_style) = if search.term().is_empty() {
        ("Type to search...".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (format!("{}▏", search.term()), Style::default().fg(Color::Green))
    };

    let input = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, chunks[0]);

    let selected = SearchScope::ALL
        .iter()
        .position(|scope| *scope == search.scope())
        .unwrap_or(0);

    let tabs = Tabs::new(SearchScope::ALL.iter().map(|scope| scope.label()))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Scope (Tab) "));
    frame.render_widget(tabs, chunks[1]);
}
