//! Local music library backed by a JSON file, served through `CatalogProvider`

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{
    AlbumDetail, AlbumSummary, CatalogError, CatalogItem, CatalogProvider, Result, SongSummary,
    TrackSummary,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LibraryTrack {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artwork_ref: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LibraryAlbum {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub artwork_ref: Option<String>,
    #[serde(default)]
    pub tracks: Vec<LibraryTrack>,
}

impl LibraryAlbum {
    fn summary(&self) -> AlbumSummary {
        AlbumSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            artist_name: self.artist_name.clone(),
            release_date: self.release_date,
            artwork_ref: self.artwork_ref.clone(),
        }
    }

    fn song(&self, track: &LibraryTrack) -> SongSummary {
        SongSummary {
            id: track.id.clone(),
            title: track.title.clone(),
            artist_name: self.artist_name.clone(),
            release_date: self.release_date,
            artwork_ref: track.artwork_ref.clone().or_else(|| self.artwork_ref.clone()),
            album_id: Some(self.id.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    albums: Vec<LibraryAlbum>,
}

/// In-memory library with case-insensitive substring matching
#[derive(Clone, Debug, Default)]
pub struct LibraryCatalog {
    albums: Vec<LibraryAlbum>,
}

impl LibraryCatalog {
    pub fn new(albums: Vec<LibraryAlbum>) -> Self {
        Self { albums }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: LibraryFile = serde_json::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            albums = file.albums.len(),
            "Library loaded"
        );
        Ok(Self::new(file.albums))
    }

    pub fn albums(&self) -> &[LibraryAlbum] {
        &self.albums
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.tracks.len()).sum()
    }

    fn find_album(&self, album_id: &str) -> Result<&LibraryAlbum> {
        self.albums
            .iter()
            .find(|a| a.id == album_id)
            .ok_or_else(|| CatalogError::NotFound(album_id.to_string()))
    }

    fn albums_matching<F>(&self, limit: usize, matches: F) -> Vec<AlbumSummary>
    where
        F: Fn(&LibraryAlbum) -> bool,
    {
        self.albums
            .iter()
            .filter(|album| matches(album))
            .take(limit)
            .map(LibraryAlbum::summary)
            .collect()
    }

    fn songs_matching(&self, needle: &str, limit: usize) -> Vec<SongSummary> {
        self.albums
            .iter()
            .flat_map(|album| {
                album
                    .tracks
                    .iter()
                    .filter(|track| contains_ignore_case(&track.title, needle))
                    .map(move |track| album.song(track))
            })
            .take(limit)
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl CatalogProvider for LibraryCatalog {
    async fn search_albums_and_songs(&self, term: &str, limit: usize) -> Result<Vec<CatalogItem>> {
        let albums = self.albums_matching(limit, |album| {
            contains_ignore_case(&album.title, term) || contains_ignore_case(&album.artist_name, term)
        });
        let songs = self.songs_matching(term, limit);

        Ok(albums
            .into_iter()
            .map(CatalogItem::Album)
            .chain(songs.into_iter().map(CatalogItem::Song))
            .collect())
    }

    async fn search_albums_by_title_fragment(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>> {
        Ok(self.albums_matching(limit, |album| contains_ignore_case(&album.title, fragment)))
    }

    async fn search_albums_by_artist_fragment(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>> {
        Ok(self.albums_matching(limit, |album| {
            contains_ignore_case(&album.artist_name, fragment)
        }))
    }

    async fn search_songs_by_title(&self, term: &str, limit: usize) -> Result<Vec<SongSummary>> {
        Ok(self.songs_matching(term, limit))
    }

    async fn resolve_album_detail(&self, album_id: &str) -> Result<AlbumDetail> {
        let album = self.find_album(album_id)?;
        Ok(AlbumDetail {
            summary: album.summary(),
            tracks: album
                .tracks
                .iter()
                .map(|t| TrackSummary {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    artwork_ref: t.artwork_ref.clone(),
                })
                .collect(),
        })
    }

    async fn resolve_song_albums(&self, song_id: &str) -> Result<Vec<AlbumSummary>> {
        let albums: Vec<AlbumSummary> = self
            .albums
            .iter()
            .filter(|album| album.tracks.iter().any(|t| t.id == song_id))
            .map(LibraryAlbum::summary)
            .collect();

        if albums.is_empty() {
            return Err(CatalogError::NotFound(song_id.to_string()));
        }
        Ok(albums)
    }
}
