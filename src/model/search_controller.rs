//! Incremental search controller: term/scope state, token-ordered result
//! commits and the selection cursor over the committed result tree.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::SearchConfig;
use super::catalog::CatalogProvider;
use super::content::ResultGroup;
use super::cursor::{Cursor, Position};
use super::dispatcher::RequestDispatcher;
use super::playback::PlaybackQueue;
use super::search::SearchOutcome;
use super::types::{
    CommitOutcome, ControllerChange, GroupingLevel, InputDevice, SearchRequest, SearchScope,
    Selection,
};

pub type ChangeCallback = Box<dyn FnMut(ControllerChange) + Send>;

/// Owns all search state. Lives on one task; every method takes `&mut self`
/// or `&self` and no state is shared with the query workers.
pub struct SearchController {
    term: String,
    scope: SearchScope,
    latest_token: u64,
    committed_token: Option<u64>,
    results: Vec<ResultGroup>,
    selection: Option<Selection>,
    scheduled: Option<Selection>,
    last_query_failed: bool,
    dispatcher: RequestDispatcher,
    outcomes: mpsc::UnboundedReceiver<SearchOutcome>,
    on_change: Option<ChangeCallback>,
}

impl SearchController {
    /// Create the controller and its debounce worker. Must be called inside
    /// a tokio runtime.
    pub fn new(provider: Arc<dyn CatalogProvider>, config: SearchConfig) -> Self {
        let (dispatcher, outcomes) = RequestDispatcher::spawn(provider, config);
        Self {
            term: String::new(),
            scope: SearchScope::default(),
            latest_token: 0,
            committed_token: None,
            results: Vec::new(),
            selection: None,
            scheduled: None,
            last_query_failed: false,
            dispatcher,
            outcomes,
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    fn notify(&mut self, change: ControllerChange) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(change);
        }
    }

    // ========================================================================
    // Term and scope
    // ========================================================================

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn set_term(&mut self, text: impl Into<String>) {
        self.term = text.into();
        self.issue_request();
    }

    pub fn set_scope(&mut self, scope: SearchScope) {
        self.scope = scope;
        self.issue_request();
    }

    pub fn append_to_term(&mut self, c: char) {
        let mut term = self.term.clone();
        term.push(c);
        self.set_term(term);
    }

    /// Remove the last character. Returns false when the term was empty.
    pub fn backspace_term(&mut self) -> bool {
        let mut term = self.term.clone();
        if term.pop().is_none() {
            return false;
        }
        self.set_term(term);
        true
    }

    /// Clear the term. Returns false when it was already empty.
    pub fn reset_term(&mut self) -> bool {
        if self.term.is_empty() {
            return false;
        }
        self.set_term(String::new());
        true
    }

    fn issue_request(&mut self) {
        self.latest_token = self.latest_token.wrapping_add(1);
        let request = SearchRequest {
            term: self.term.clone(),
            scope: self.scope,
            token: self.latest_token,
        };
        tracing::trace!(token = request.token, term = %request.term, scope = ?request.scope, "Search request issued");
        self.dispatcher.push(request);
        self.clear_selection();
    }

    /// Token of the most recently issued request
    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Token of the most recently applied commit
    pub fn committed_token(&self) -> Option<u64> {
        self.committed_token
    }

    // ========================================================================
    // Result commits
    // ========================================================================

    pub fn results(&self) -> &[ResultGroup] {
        &self.results
    }

    pub fn group(&self, group_id: &str) -> Option<&ResultGroup> {
        self.results.iter().find(|g| g.id == group_id)
    }

    /// Whether the newest commit came from a failed query
    pub fn last_query_failed(&self) -> bool {
        self.last_query_failed
    }

    /// Whether a newer request than the visible results is still outstanding
    pub fn is_searching(&self) -> bool {
        self.committed_token.unwrap_or(0) != self.latest_token
    }

    /// Apply every finished query without waiting. Returns true when at
    /// least one commit was applied.
    pub fn poll_commits(&mut self) -> bool {
        let mut applied = false;
        while let Ok(outcome) = self.outcomes.try_recv() {
            applied |= self.apply(outcome).is_applied();
        }
        applied
    }

    /// Wait for the next finished query and run it through the commit policy
    pub async fn next_outcome(&mut self) -> Option<CommitOutcome> {
        let outcome = self.outcomes.recv().await?;
        Some(self.apply(outcome))
    }

    fn apply(&mut self, outcome: SearchOutcome) -> CommitOutcome {
        let token = outcome.token;
        if let Some(committed) = self.committed_token {
            if token < committed {
                tracing::debug!(token, committed, "Discarding stale search results");
                return CommitOutcome::Discarded { token };
            }
        }

        tracing::debug!(token, groups = outcome.groups.len(), failed = outcome.failed, "Committing search results");
        self.committed_token = Some(token);
        self.results = outcome.groups;
        self.last_query_failed = outcome.failed;
        // TODO: keep a selection whose group and entry ids survive the refresh
        self.selection = None;
        self.scheduled = None;
        self.notify(ControllerChange::Results);

        CommitOutcome::Applied { token }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn current_selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    fn current_position(&self) -> Option<Position> {
        let selection = self.selection.as_ref()?;
        Cursor::new(&self.results).locate(selection)
    }

    pub fn select_next(&mut self, level: GroupingLevel, source: InputDevice) -> bool {
        let cursor = Cursor::new(&self.results);
        let target = cursor
            .next(self.current_position(), level)
            .and_then(|position| cursor.selection_at(position, source));
        self.move_to(target)
    }

    pub fn select_previous(&mut self, level: GroupingLevel, source: InputDevice) -> bool {
        let Some(from) = self.current_position() else {
            return false;
        };
        let cursor = Cursor::new(&self.results);
        let target = cursor
            .previous(Some(from), level)
            .and_then(|position| cursor.selection_at(position, source));
        self.move_to(target)
    }

    fn move_to(&mut self, target: Option<Selection>) -> bool {
        match target {
            Some(selection) => {
                self.selection = Some(selection);
                self.notify(ControllerChange::Selection);
                true
            }
            None => false,
        }
    }

    /// Select a group, or one of its entries, by id. Rejected when the ids
    /// are not part of the current results.
    pub fn set_selection(&mut self, group_id: &str, entry_id: Option<&str>, source: InputDevice) -> bool {
        let selection = Selection {
            group_id: group_id.to_string(),
            entry_id: entry_id.map(str::to_string),
            source,
        };
        if Cursor::new(&self.results).locate(&selection).is_none() {
            tracing::debug!(group_id, entry_id, "Ignoring selection outside current results");
            return false;
        }
        self.move_to(Some(selection))
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.notify(ControllerChange::Selection);
        }
    }

    // ========================================================================
    // Playback scheduling
    // ========================================================================

    pub fn schedule_selected_for_playback(&mut self) -> bool {
        let Some(selection) = self.selection.clone() else {
            return false;
        };
        tracing::debug!(group_id = %selection.group_id, entry_id = ?selection.entry_id, "Scheduled selection for playback");
        self.scheduled = Some(selection);
        self.notify(ControllerChange::Playback);
        true
    }

    pub fn scheduled_playback(&self) -> Option<&Selection> {
        self.scheduled.as_ref()
    }

    pub fn take_scheduled_playback(&mut self) -> Option<Selection> {
        self.scheduled.take()
    }

    /// Hand the scheduled selection to the playback queue. Returns false when
    /// nothing was scheduled.
    pub fn dispatch_scheduled_playback(&mut self, queue: &mut PlaybackQueue) -> bool {
        let Some(scheduled) = self.take_scheduled_playback() else {
            return false;
        };
        let Some(group) = self.group(&scheduled.group_id) else {
            return false;
        };
        queue.load(group, scheduled.entry_id.as_deref());
        self.notify(ControllerChange::Playback);
        true
    }
}
