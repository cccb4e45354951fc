//! Result tree rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{InputDevice, ResultGroup, SearchController, Selection};
use super::utils::truncate_string;

/// One visible line of the result tree: a group header or one of its entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub group_id: String,
    pub entry_id: Option<String>,
}

/// Flatten the result tree into display rows, group header first
pub fn result_rows(results: &[ResultGroup]) -> Vec<ResultRow> {
    results
        .iter()
        .flat_map(|group| {
            std::iter::once(ResultRow { group_id: group.id.clone(), entry_id: None }).chain(
                group.entries.iter().map(|entry| ResultRow {
                    group_id: group.id.clone(),
                    entry_id: Some(entry.id.clone()),
                }),
            )
        })
        .collect()
}

pub fn selected_row(rows: &[ResultRow], selection: Option<&Selection>) -> Option<usize> {
    let selection = selection?;
    rows.iter()
        .position(|row| row.group_id == selection.group_id && row.entry_id == selection.entry_id)
}

pub fn render_results(frame: &mut Frame, area: Rect, search: &SearchController, list_state: &mut ListState) {
    let results = search.results();
    let title = if search.is_searching() {
        " Results (searching…) ".to_string()
    } else {
        format!(" Results ({}) ", results.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1));

    if results.is_empty() {
        let hint = if search.term().is_empty() {
            "Type to search your library\n\nTab switches scope, ↑/↓ moves, Enter plays"
        } else if search.last_query_failed() {
            "Search failed"
        } else {
            "No matches"
        };
        let placeholder = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let selection = search.current_selection();
    let selection_color = match selection.map(|s| s.source) {
        Some(InputDevice::Pointer) => Color::Cyan,
        _ => Color::Green,
    };

    let rows = result_rows(results);
    let selected = selected_row(&rows, selection);

    let mut items = Vec::with_capacity(rows.len());
    for group in results {
        let header = format!("{} · {} {}", group.title, group.artist_name, group.year());
        items.push(ListItem::new(Line::from(Span::styled(
            truncate_string(header.trim_end(), width),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))));
        for (i, entry) in group.entries.iter().enumerate() {
            let text = format!("  {:>2}  {}", i + 1, entry.title);
            items.push(ListItem::new(truncate_string(&text, width)));
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(selection_color)
                .add_modifier(Modifier::BOLD),
        );

    list_state.select(selected);
    frame.render_stateful_widget(list, area, list_state);
}
