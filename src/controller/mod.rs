//! Controller module - terminal event handling
//!
//! This module turns terminal input into search controller operations and
//! hands scheduled selections to the playback queue.
//!
//! - `input`: Key and mouse event handling

mod input;

use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::config::SearchConfig;
use crate::model::{CatalogProvider, PlaybackQueue, SearchController};

/// Presentation-only state shared between input handling and rendering
#[derive(Default)]
pub struct UiState {
    pub show_help_popup: bool,
    pub should_quit: bool,
    /// Result list area from the last frame, used to map mouse clicks
    pub results_area: Rect,
    pub results_list: ListState,
}

pub struct AppController {
    pub search: SearchController,
    pub playback: PlaybackQueue,
    pub ui: UiState,
}

impl AppController {
    /// Must be called inside a tokio runtime
    pub fn new(provider: Arc<dyn CatalogProvider>, config: SearchConfig) -> Self {
        Self {
            search: SearchController::new(provider, config),
            playback: PlaybackQueue::new(),
            ui: UiState::default(),
        }
    }

    /// Apply finished searches. Returns true when the visible results changed.
    pub fn tick(&mut self) -> bool {
        let changed = self.search.poll_commits();
        if changed {
            self.ui.results_list = ListState::default();
        }
        changed
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub(crate) fn play_scheduled(&mut self) {
        if self.search.dispatch_scheduled_playback(&mut self.playback) {
            if let Some(now) = self.playback.now_playing() {
                tracing::info!(track = %now.entry.title, album = %now.album, "Now playing");
            }
        }
    }
}
