//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared formatting helpers
//! - `layout`: Top bar (search input, scope tabs)
//! - `content`: Result tree
//! - `progress`: Now-playing bar
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::controller::UiState;
use crate::model::{PlaybackQueue, SearchController};

pub use content::{result_rows, selected_row, ResultRow};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, search: &SearchController, playback: &PlaybackQueue, ui_state: &mut UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + scope
                Constraint::Min(0),    // Result tree
                Constraint::Length(3), // Now playing
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], search);

        ui_state.results_area = chunks[1];
        content::render_results(frame, chunks[1], search, &mut ui_state.results_list);

        progress::render_now_playing(frame, chunks[2], playback);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
