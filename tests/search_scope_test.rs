//! Scope strategy tests
//!
//! Intersection for album/artist scopes, song fan-out, de-duplication and
//! result ordering.

mod common;

use std::sync::Arc;

use cappella::model::{SearchController, SearchScope};
use common::{commit_term, create_album, group_ids, test_config, ScriptedCatalog};

async fn search(catalog: &Arc<ScriptedCatalog>, scope: SearchScope, term: &str) -> SearchController {
    let mut controller = SearchController::new(catalog.clone(), test_config());
    controller.set_scope(scope);
    commit_term(&mut controller, term).await;
    controller
}

// ===== Album / Artist Intersection =====

#[tokio::test(start_paused = true)]
async fn test_album_scope_keeps_albums_matching_every_fragment() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("a", "Foo Bar", "Alpha", "2001-01-01", &["one"]),
        create_album("b", "Foo Only", "Alpha", "2002-01-01", &["one"]),
        create_album("c", "Bar Only", "Alpha", "2003-01-01", &["one"]),
        create_album("d", "Bar Foo", "Beta", "1999-01-01", &["one"]),
    ]));

    let controller = search(&catalog, SearchScope::Album, "foo bar").await;

    assert_eq!(group_ids(&controller), vec!["a", "d"]);
    assert_eq!(
        catalog.search_calls(),
        vec!["albums_by_title:foo", "albums_by_title:bar"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_album_scope_ignores_short_fragments() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("a", "Foo Bar", "Alpha", "2001-01-01", &["one"]),
    ]));

    let controller = search(&catalog, SearchScope::Album, "foo x bar").await;

    assert_eq!(group_ids(&controller), vec!["a"]);
    assert_eq!(
        catalog.search_calls(),
        vec!["albums_by_title:foo", "albums_by_title:bar"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_artist_scope_matches_artist_fragments() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("ro", "Radical Optimism", "Dua Lipa", "2024-05-03", &["Houdini"]),
        create_album("fn", "Future Nostalgia", "Dua Lipa", "2020-03-27", &["Levitating"]),
        create_album("lp", "Lipa Covers", "Tribute Band", "2021-01-01", &["Houdini"]),
    ]));

    let controller = search(&catalog, SearchScope::Artist, "dua lipa").await;

    // Sorted by release date within the same artist
    assert_eq!(group_ids(&controller), vec!["fn", "ro"]);
    assert_eq!(
        catalog.search_calls(),
        vec!["albums_by_artist:dua", "albums_by_artist:lipa"]
    );
    assert_eq!(controller.results()[1].entries.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_intersection_stops_querying_once_empty() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("a", "Foo", "Alpha", "2001-01-01", &["one"]),
    ]));

    let controller = search(&catalog, SearchScope::Album, "zz foo").await;

    assert!(controller.results().is_empty());
    assert_eq!(catalog.search_calls(), vec!["albums_by_title:zz"]);
}

// ===== Song Fan-Out =====

#[tokio::test(start_paused = true)]
async fn test_song_scope_builds_album_groups_with_matched_songs_only() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("x", "Album X", "Artist", "2010-01-01", &["Love Song", "Other", "Love Again"]),
        create_album("y", "Album Y", "Artist", "2011-01-01", &["Something Else"]),
    ]));

    let controller = search(&catalog, SearchScope::Song, "love").await;

    // Two matched songs on the same album collapse into one group
    assert_eq!(group_ids(&controller), vec!["x"]);
    let titles: Vec<&str> = controller.results()[0]
        .entries
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Love Song", "Love Again"]);
    assert!(controller.results()[0]
        .entries
        .iter()
        .all(|e| e.parent_group_id == "x"));
}

// ===== All Scope =====

#[tokio::test(start_paused = true)]
async fn test_all_scope_dedups_album_and_song_hits() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![create_album(
        "fn",
        "Future Nostalgia",
        "Dua Lipa",
        "2020-03-27",
        &["Future Nostalgia", "Don't Start Now", "Cool"],
    )]));

    let controller = search(&catalog, SearchScope::All, "nostalgia").await;

    // The album hit comes first and keeps its full track list
    assert_eq!(group_ids(&controller), vec!["fn"]);
    assert_eq!(controller.results()[0].entries.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_all_scope_includes_albums_of_matched_songs() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("ok", "OK Computer", "Radiohead", "1997-05-21", &["Airbag", "Karma Police"]),
        create_album("ir", "In Rainbows", "Radiohead", "2007-10-10", &["Nude"]),
    ]));

    let controller = search(&catalog, SearchScope::All, "karma").await;

    assert_eq!(group_ids(&controller), vec!["ok"]);
    let entries = &controller.results()[0].entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Karma Police");
}

// ===== Ordering =====

#[tokio::test(start_paused = true)]
async fn test_results_sorted_by_artist_date_title() {
    let catalog = Arc::new(ScriptedCatalog::new(vec![
        create_album("z", "Common Alpha", "Zed", "2001-01-01", &["one"]),
        create_album("b", "Common Beta", "Abba", "1980-01-01", &["one"]),
        create_album("g", "Common Gamma", "Abba", "1975-01-01", &["one"]),
        create_album("d", "Common Delta", "Abba", "1980-01-01", &["one"]),
    ]));

    let controller = search(&catalog, SearchScope::All, "common").await;

    assert_eq!(group_ids(&controller), vec!["g", "b", "d", "z"]);
}
