//! Shared test helpers: a scripted catalog wrapping an in-memory library

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use cappella::config::SearchConfig;
use cappella::model::catalog::Result;
use cappella::model::{
    AlbumDetail, AlbumSummary, CatalogError, CatalogItem, CatalogProvider, CommitOutcome,
    LibraryAlbum, LibraryCatalog, LibraryTrack, SearchController, SongSummary,
};
use chrono::NaiveDate;

// ===== Library Builders =====

pub fn create_album(id: &str, title: &str, artist: &str, date: &str, tracks: &[&str]) -> LibraryAlbum {
    LibraryAlbum {
        id: id.to_string(),
        title: title.to_string(),
        artist_name: artist.to_string(),
        release_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        artwork_ref: None,
        tracks: tracks
            .iter()
            .enumerate()
            .map(|(i, title)| LibraryTrack {
                id: format!("{}-{}", id, i + 1),
                title: title.to_string(),
                artwork_ref: None,
            })
            .collect(),
    }
}

pub fn radical_optimism() -> LibraryAlbum {
    create_album(
        "radical-optimism",
        "Radical Optimism",
        "Dua Lipa",
        "2024-05-03",
        &[
            "End of an Era",
            "Houdini",
            "Training Season",
            "These Walls",
            "Whatcha Doing",
            "French Exit",
            "Illusion",
            "Falling Forever",
            "Anything for Love",
            "Maria",
            "Happy for You",
        ],
    )
}

pub fn test_config() -> SearchConfig {
    SearchConfig {
        debounce_ms: 500,
        result_limit: 10,
        min_fragment_len: 2,
    }
}

// ===== Scripted Catalog =====

/// Library-backed catalog that records every call and can be told to stall
/// or fail on specific arguments.
pub struct ScriptedCatalog {
    inner: LibraryCatalog,
    calls: Mutex<Vec<String>>,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
}

impl ScriptedCatalog {
    pub fn new(albums: Vec<LibraryAlbum>) -> Self {
        Self {
            inner: LibraryCatalog::new(albums),
            calls: Mutex::new(Vec::new()),
            delays: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Stall every call whose argument equals `arg`
    pub fn with_delay(mut self, arg: &str, delay: Duration) -> Self {
        self.delays.insert(arg.to_string(), delay);
        self
    }

    /// Fail every call whose argument equals `arg`
    pub fn failing_on(mut self, arg: &str) -> Self {
        self.failing.insert(arg.to_string());
        self
    }

    /// Every call as `operation:argument`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Search calls only, without the album/song resolution that follows
    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("resolve"))
            .collect()
    }

    async fn record(&self, operation: &str, arg: &str) -> Result<()> {
        self.calls.lock().unwrap().push(format!("{}:{}", operation, arg));
        if let Some(delay) = self.delays.get(arg) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(arg) {
            return Err(CatalogError::Unavailable(format!("scripted failure for {}", arg)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    async fn search_albums_and_songs(&self, term: &str, limit: usize) -> Result<Vec<CatalogItem>> {
        self.record("albums_and_songs", term).await?;
        self.inner.search_albums_and_songs(term, limit).await
    }

    async fn search_albums_by_title_fragment(&self, fragment: &str, limit: usize) -> Result<Vec<AlbumSummary>> {
        self.record("albums_by_title", fragment).await?;
        self.inner.search_albums_by_title_fragment(fragment, limit).await
    }

    async fn search_albums_by_artist_fragment(&self, fragment: &str, limit: usize) -> Result<Vec<AlbumSummary>> {
        self.record("albums_by_artist", fragment).await?;
        self.inner.search_albums_by_artist_fragment(fragment, limit).await
    }

    async fn search_songs_by_title(&self, term: &str, limit: usize) -> Result<Vec<SongSummary>> {
        self.record("songs_by_title", term).await?;
        self.inner.search_songs_by_title(term, limit).await
    }

    async fn resolve_album_detail(&self, album_id: &str) -> Result<AlbumDetail> {
        self.record("resolve_album", album_id).await?;
        self.inner.resolve_album_detail(album_id).await
    }

    async fn resolve_song_albums(&self, song_id: &str) -> Result<Vec<AlbumSummary>> {
        self.record("resolve_song", song_id).await?;
        self.inner.resolve_song_albums(song_id).await
    }
}

// ===== Controller Helpers =====

/// Set `term` and wait until its results are committed
pub async fn commit_term(controller: &mut SearchController, term: &str) {
    controller.set_term(term);
    let expected = controller.latest_token();
    let outcome = controller.next_outcome().await;
    assert_eq!(outcome, Some(CommitOutcome::Applied { token: expected }));
}

pub fn group_ids(controller: &SearchController) -> Vec<String> {
    controller.results().iter().map(|g| g.id.clone()).collect()
}
