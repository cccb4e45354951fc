//! Catalog provider interface: the external collaborator queried by searches

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a catalog provider
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No album or song with the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog backend is not reachable
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// IO error while reading catalog data
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data could not be decoded
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub release_date: Option<NaiveDate>,
    pub artwork_ref: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub release_date: Option<NaiveDate>,
    pub artwork_ref: Option<String>,
    /// Album the song was found on, when the catalog knows it
    pub album_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
    pub artwork_ref: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumDetail {
    pub summary: AlbumSummary,
    pub tracks: Vec<TrackSummary>,
}

/// One hit of a combined album + song search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogItem {
    Album(AlbumSummary),
    Song(SongSummary),
}

/// Asynchronous music catalog queried by the search controller.
///
/// Implementations must be shareable across tasks: queries for superseded
/// requests keep running to completion next to newer ones.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Whole-term search over albums and songs
    async fn search_albums_and_songs(&self, term: &str, limit: usize) -> Result<Vec<CatalogItem>>;

    async fn search_albums_by_title_fragment(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>>;

    async fn search_albums_by_artist_fragment(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>>;

    async fn search_songs_by_title(&self, term: &str, limit: usize) -> Result<Vec<SongSummary>>;

    /// Full album with its tracks in catalog order
    async fn resolve_album_detail(&self, album_id: &str) -> Result<AlbumDetail>;

    /// Albums a song appears on
    async fn resolve_song_albums(&self, song_id: &str) -> Result<Vec<AlbumSummary>>;
}

/// Log a catalog call and its result
#[macro_export]
macro_rules! log_catalog_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::trace!(operation = $operation, "Catalog request successful"),
            Err(e) => tracing::warn!(operation = $operation, error = %e, "Catalog request failed"),
        }
    };
}
