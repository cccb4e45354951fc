//! Overlay rendering (help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYBINDINGS: &[(&str, &str)] = &[
    ("", "── Search ──"),
    ("Type", "Edit search term"),
    ("Backspace", "Delete last character"),
    ("Esc", "Clear term (again to quit)"),
    ("Tab / Shift+Tab", "Cycle scope"),
    ("", ""),
    ("", "── Results ──"),
    ("↑ / ↓", "Previous / next track"),
    ("PgUp / PgDn", "Previous / next album"),
    ("Ctrl+↑ / Ctrl+↓", "Previous / next album"),
    ("Enter", "Play selection"),
    ("Click", "Select, click again to play"),
    ("", ""),
    ("", "── Playback ──"),
    ("Ctrl+N", "Next track in queue"),
    ("Ctrl+P", "Previous track in queue"),
    ("", ""),
    ("", "── General ──"),
    ("F1 / ?", "Toggle this help"),
    ("Ctrl+Q", "Quit"),
];

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 56.min(area.width.saturating_sub(2));
    let popup_height = (KEYBINDINGS.len() as u16 + 2).min(area.height.saturating_sub(2));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = KEYBINDINGS
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^34}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (F1 or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help, popup_area);
}
