//! Terminal input tests: key and mouse events drive the search controller

mod common;

use std::sync::Arc;

use cappella::controller::AppController;
use cappella::model::{CommitOutcome, InputDevice, SearchScope};
use common::{radical_optimism, test_config, ScriptedCatalog};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

fn app() -> AppController {
    let catalog = Arc::new(ScriptedCatalog::new(vec![radical_optimism()]));
    AppController::new(catalog, test_config())
}

fn press(app: &mut AppController, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

fn type_text(app: &mut AppController, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

async fn wait_for_commit(app: &mut AppController) {
    let outcome = app.search.next_outcome().await;
    assert!(matches!(outcome, Some(CommitOutcome::Applied { .. })));
}

fn click(app: &mut AppController, column: u16, row: u16) {
    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[tokio::test(start_paused = true)]
async fn test_typing_navigating_and_enter_starts_playback() {
    let mut app = app();

    type_text(&mut app, "radical");
    assert_eq!(app.search.term(), "radical");
    wait_for_commit(&mut app).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let now = app.playback.now_playing().unwrap();
    assert_eq!(now.entry.title, "Houdini");
    assert_eq!(app.playback.len(), 10);
    assert!(app.search.scheduled_playback().is_none());

    app.handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
        .unwrap();
    assert_eq!(app.playback.now_playing().unwrap().entry.title, "Training Season");
    assert_eq!(app.search.term(), "radical");
}

#[tokio::test(start_paused = true)]
async fn test_escape_clears_term_then_quits() {
    let mut app = app();

    type_text(&mut app, "ra");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.search.term(), "");
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_tab_cycles_scope() {
    let mut app = app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.search.scope(), SearchScope::Album);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.search.scope(), SearchScope::Song);
}

#[tokio::test(start_paused = true)]
async fn test_help_popup_swallows_keys() {
    let mut app = app();

    press(&mut app, KeyCode::Char('?'));
    assert!(app.ui.show_help_popup);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.search.term(), "");

    press(&mut app, KeyCode::Esc);
    assert!(!app.ui.show_help_popup);
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_click_selects_row_and_second_click_plays() {
    let mut app = app();
    type_text(&mut app, "radical");
    wait_for_commit(&mut app).await;
    assert_eq!(app.search.results().len(), 1);

    app.ui.results_area = Rect { x: 0, y: 3, width: 60, height: 20 };

    // Row 5 is the second line inside the border: the first entry
    click(&mut app, 10, 5);
    let selection = app.search.current_selection().unwrap();
    assert_eq!(selection.source, InputDevice::Pointer);
    assert_eq!(selection.entry_id.as_deref(), Some("radical-optimism-1"));
    assert!(app.playback.now_playing().is_none());

    click(&mut app, 10, 5);
    assert_eq!(app.playback.now_playing().unwrap().entry.title, "End of an Era");

    // Clicks on the border are ignored
    click(&mut app, 0, 4);
    assert_eq!(
        app.search.current_selection().unwrap().entry_id.as_deref(),
        Some("radical-optimism-1")
    );
}
