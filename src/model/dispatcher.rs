//! Debounced request dispatch.
//!
//! Requests land in a single-slot `watch` buffer where the newest value
//! overwrites any unconsumed one. One worker task waits until the buffer has
//! been quiet for the debounce interval, then spawns the query for whatever
//! request is buffered. Finished queries report back over an mpsc channel;
//! they are never cancelled, stale outcomes are filtered by token on the
//! receiving side.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::SearchConfig;
use super::catalog::CatalogProvider;
use super::search::{self, SearchOutcome};
use super::types::SearchRequest;

pub struct RequestDispatcher {
    requests: watch::Sender<Option<SearchRequest>>,
    worker: JoinHandle<()>,
}

impl RequestDispatcher {
    /// Start the debounce worker. Must be called inside a tokio runtime.
    pub fn spawn(
        provider: Arc<dyn CatalogProvider>,
        config: SearchConfig,
    ) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>) {
        let (requests, pending) = watch::channel(None);
        let (outcomes, outcome_rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(debounce_loop(pending, provider, config, outcomes));

        (Self { requests, worker }, outcome_rx)
    }

    /// Replace the buffered request
    pub fn push(&self, request: SearchRequest) {
        self.requests.send_replace(Some(request));
    }
}

impl Drop for RequestDispatcher {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn debounce_loop(
    mut pending: watch::Receiver<Option<SearchRequest>>,
    provider: Arc<dyn CatalogProvider>,
    config: SearchConfig,
    outcomes: mpsc::UnboundedSender<SearchOutcome>,
) {
    let quiet = config.debounce();

    while pending.changed().await.is_ok() {
        // Restart the quiet interval on every push
        loop {
            tokio::select! {
                _ = tokio::time::sleep(quiet) => break,
                changed = pending.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
            }
        }

        let Some(request) = pending.borrow_and_update().clone() else {
            continue;
        };
        tracing::debug!(token = request.token, term = %request.term, scope = ?request.scope, "Firing search request");

        let provider = provider.clone();
        let config = config.clone();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let outcome = search::execute(provider.as_ref(), &request, &config).await;
            if outcomes.send(outcome).is_err() {
                tracing::trace!(token = request.token, "Search outcome dropped, controller is gone");
            }
        });
    }
}
