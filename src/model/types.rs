//! Core type definitions for the search controller

/// Field space a search term is matched against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SearchScope {
    #[default]
    All,
    Album,
    Artist,
    Song,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        SearchScope::All,
        SearchScope::Album,
        SearchScope::Artist,
        SearchScope::Song,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Album,
            Self::Album => Self::Artist,
            Self::Artist => Self::Song,
            Self::Song => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Song,
            Self::Album => Self::All,
            Self::Artist => Self::Album,
            Self::Song => Self::Artist,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Album => "Album",
            Self::Artist => "Artist",
            Self::Song => "Song",
        }
    }
}

/// Input device that produced a selection change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDevice {
    Pointer,
    Keyboard,
}

/// Step size for cursor movement over the result tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupingLevel {
    Group,
    Entry,
}

/// One search request. Superseded requests are recognised by their token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub scope: SearchScope,
    pub token: u64,
}

/// The active cursor over the result tree.
///
/// When `entry_id` is set it always names an entry of the group `group_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub group_id: String,
    pub entry_id: Option<String>,
    pub source: InputDevice,
}

/// What a change notification is about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerChange {
    Results,
    Selection,
    Playback,
}

/// How a completed query was handled by the commit policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied { token: u64 },
    Discarded { token: u64 },
}

impl CommitOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, CommitOutcome::Applied { .. })
    }
}
