//! Playback queue fed by scheduled selections

use std::time::Instant;

use super::content::{ResultEntry, ResultGroup};

/// Track currently handed to the player
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NowPlaying {
    pub entry: ResultEntry,
    pub album: String,
    pub artist: String,
}

/// Queue of entries from one group, starting at the scheduled entry
#[derive(Clone, Debug, Default)]
pub struct PlaybackQueue {
    album: String,
    artist: String,
    entries: Vec<ResultEntry>,
    position: usize,
    started_at: Option<Instant>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with `group`'s entries from `start_entry` onward.
    /// Without a start entry the whole group is queued.
    pub fn load(&mut self, group: &ResultGroup, start_entry: Option<&str>) {
        let start = start_entry
            .and_then(|id| group.entry_index(id))
            .unwrap_or(0);

        self.album = group.title.clone();
        self.artist = group.artist_name.clone();
        self.entries = group.entries.iter().skip(start).cloned().collect();
        self.position = 0;
        self.started_at = (!self.entries.is_empty()).then(Instant::now);

        tracing::info!(
            album = %self.album,
            queued = self.entries.len(),
            start_entry = ?start_entry,
            "Playback queue loaded"
        );
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        let entry = self.entries.get(self.position)?;
        Some(NowPlaying {
            entry: entry.clone(),
            album: self.album.clone(),
            artist: self.artist.clone(),
        })
    }

    /// Step to the next queued entry. Returns false at the end of the queue.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 >= self.entries.len() {
            return false;
        }
        self.position += 1;
        self.started_at = Some(Instant::now());
        true
    }

    /// Step back one entry. Returns false at the start of the queue.
    pub fn previous(&mut self) -> bool {
        if self.position == 0 || self.entries.is_empty() {
            return false;
        }
        self.position -= 1;
        self.started_at = Some(Instant::now());
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Zero-based index of the playing entry within the queue
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn upcoming(&self) -> &[ResultEntry] {
        self.entries.get(self.position + 1..).unwrap_or(&[])
    }

    /// Time since the current entry started
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }
}
