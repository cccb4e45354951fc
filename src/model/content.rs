//! Result tree data structures: groups (albums) and their playable entries

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use super::catalog::{AlbumDetail, AlbumSummary, SongSummary};

/// A playable leaf of the result tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultEntry {
    pub id: String,
    pub title: String,
    pub artwork_ref: Option<String>,
    pub parent_group_id: String,
}

/// One collection returned by a query, entries in catalog (track) order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultGroup {
    pub id: String,
    pub title: String,
    /// Shown as the group's subtitle
    pub artist_name: String,
    pub release_date: Option<NaiveDate>,
    pub artwork_ref: Option<String>,
    pub entries: Vec<ResultEntry>,
}

impl ResultGroup {
    /// Group holding every track of an album
    pub fn from_album_detail(detail: AlbumDetail) -> Self {
        let group_id = detail.summary.id.clone();
        let entries = detail
            .tracks
            .into_iter()
            .map(|track| ResultEntry {
                id: track.id,
                title: track.title,
                artwork_ref: track.artwork_ref,
                parent_group_id: group_id.clone(),
            })
            .collect();

        Self::with_entries(detail.summary, entries)
    }

    /// Album-shaped group holding only the given matched song
    pub fn from_song(album: AlbumSummary, song: &SongSummary) -> Self {
        let entry = ResultEntry {
            id: song.id.clone(),
            title: song.title.clone(),
            artwork_ref: song.artwork_ref.clone(),
            parent_group_id: album.id.clone(),
        };
        Self::with_entries(album, vec![entry])
    }

    fn with_entries(summary: AlbumSummary, entries: Vec<ResultEntry>) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            artist_name: summary.artist_name,
            release_date: summary.release_date,
            artwork_ref: summary.artwork_ref,
            entries,
        }
    }

    pub fn entry(&self, entry_id: &str) -> Option<&ResultEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn entry_index(&self, entry_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == entry_id)
    }

    /// Release year for display, empty when unknown
    pub fn year(&self) -> String {
        self.release_date
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_default()
    }
}

/// Ordering used for every committed result list: artist name, then release
/// date, then title. Names compare case-insensitively; unknown dates first.
pub fn compare_groups(a: &ResultGroup, b: &ResultGroup) -> Ordering {
    a.artist_name
        .to_lowercase()
        .cmp(&b.artist_name.to_lowercase())
        .then_with(|| a.release_date.cmp(&b.release_date))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
}

pub fn sort_groups(groups: &mut [ResultGroup]) {
    groups.sort_by(compare_groups);
}

/// Drop groups whose id was already seen, keeping the first occurrence
pub fn dedup_groups(groups: Vec<ResultGroup>) -> Vec<ResultGroup> {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|group| seen.insert(group.id.clone()))
        .collect()
}

/// Collapse duplicate group ids into their first occurrence, appending the
/// entries of later duplicates that are not already present.
pub fn merge_groups(groups: Vec<ResultGroup>) -> Vec<ResultGroup> {
    let mut merged: Vec<ResultGroup> = Vec::with_capacity(groups.len());

    for group in groups {
        match merged.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                for entry in group.entries {
                    if existing.entry(&entry.id).is_none() {
                        existing.entries.push(entry);
                    }
                }
            }
            None => merged.push(group),
        }
    }

    merged
}
