//! Key and mouse event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::model::{GroupingLevel, InputDevice};
use crate::view::result_rows;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Help popup blocks everything else
        if self.ui.show_help_popup {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.ui.show_help_popup = false;
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let keyboard = InputDevice::Keyboard;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => {
                self.ui.should_quit = true;
            }
            KeyCode::Char('n') if ctrl => {
                self.playback.advance();
            }
            KeyCode::Char('p') if ctrl => {
                self.playback.previous();
            }
            KeyCode::F(1) => {
                self.ui.show_help_popup = true;
            }
            KeyCode::Char('?') if self.search.term().is_empty() => {
                self.ui.show_help_popup = true;
            }
            KeyCode::Char(c) if !ctrl => {
                self.search.append_to_term(c);
            }
            KeyCode::Backspace => {
                self.search.backspace_term();
            }
            KeyCode::Esc => {
                // Second Esc on an empty term leaves the app
                if !self.search.reset_term() {
                    self.ui.should_quit = true;
                }
            }
            KeyCode::Tab => {
                self.search.set_scope(self.search.scope().next());
            }
            KeyCode::BackTab => {
                self.search.set_scope(self.search.scope().prev());
            }
            KeyCode::Down if ctrl => {
                self.search.select_next(GroupingLevel::Group, keyboard);
            }
            KeyCode::Up if ctrl => {
                self.search.select_previous(GroupingLevel::Group, keyboard);
            }
            KeyCode::Down => {
                self.search.select_next(GroupingLevel::Entry, keyboard);
            }
            KeyCode::Up => {
                self.search.select_previous(GroupingLevel::Entry, keyboard);
            }
            KeyCode::PageDown => {
                self.search.select_next(GroupingLevel::Group, keyboard);
            }
            KeyCode::PageUp => {
                self.search.select_previous(GroupingLevel::Group, keyboard);
            }
            KeyCode::Enter => {
                if self.search.schedule_selected_for_playback() {
                    self.play_scheduled();
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Left click selects the row under the pointer; clicking the selected
    /// row again plays it.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.ui.show_help_popup {
            return;
        }

        let area = self.ui.results_area;
        let inside = mouse.column > area.x
            && mouse.column < area.x + area.width.saturating_sub(1)
            && mouse.row > area.y
            && mouse.row < area.y + area.height.saturating_sub(1);
        if !inside {
            return;
        }

        let index = self.ui.results_list.offset() + (mouse.row - area.y - 1) as usize;
        let rows = result_rows(self.search.results());
        let Some(row) = rows.get(index) else {
            return;
        };

        let already_selected = self.search.current_selection().is_some_and(|selection| {
            selection.group_id == row.group_id && selection.entry_id == row.entry_id
        });

        if already_selected {
            if self.search.schedule_selected_for_playback() {
                self.play_scheduled();
            }
        } else {
            self.search
                .set_selection(&row.group_id, row.entry_id.as_deref(), InputDevice::Pointer);
        }
    }
}
