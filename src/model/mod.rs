//! Model module - search state and data types
//!
//! This module contains the search controller and everything it works with.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (scope, selection, requests)
//! - `content`: Result tree (groups and entries) and its ordering
//! - `catalog`: Catalog provider interface and catalog-side values
//! - `library`: JSON-file backed catalog provider
//! - `search`: Scope-dependent query strategies
//! - `dispatcher`: Debounced request dispatch to the query workers
//! - `cursor`: Two-level selection cursor
//! - `playback`: Playback queue fed by scheduled selections
//! - `search_controller`: The controller tying all of the above together

mod types;
mod content;
pub mod catalog;
mod library;
pub mod search;
mod dispatcher;
mod cursor;
mod playback;
mod search_controller;

// Re-export all public types for convenient access
pub use types::{
    CommitOutcome, ControllerChange, GroupingLevel, InputDevice, SearchRequest, SearchScope,
    Selection,
};

pub use content::{ResultEntry, ResultGroup, compare_groups};

pub use catalog::{
    AlbumDetail, AlbumSummary, CatalogError, CatalogItem, CatalogProvider, SongSummary,
    TrackSummary,
};

pub use library::{LibraryAlbum, LibraryCatalog, LibraryTrack};

pub use playback::{NowPlaying, PlaybackQueue};

pub use search_controller::{ChangeCallback, SearchController};
