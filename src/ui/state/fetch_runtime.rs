use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::query::SearchQuery;
use crate::systems::fetch::{FetchCommand, FetchEvent};

/// Tracks the controller's outstanding fetch.
///
/// At most one request id is authoritative at a time. Issuing a new fetch
/// supersedes the previous id immediately, so an event for any other id is
/// stale by definition and must not touch state. The shared atomic mirrors
/// the newest id for the worker thread, which uses it to skip work that is
/// already superseded while still queued.
pub(crate) struct FetchRuntime {
    tx: Sender<FetchCommand>,
    rx: Receiver<FetchEvent>,
    latest_request_id: Arc<AtomicU64>,
    next_request_id: u64,
    pending_request_id: Option<u64>,
    issued_any: bool,
}

impl FetchRuntime {
    pub(crate) fn new(
        tx: Sender<FetchCommand>,
        rx: Receiver<FetchEvent>,
        latest_request_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_request_id,
            next_request_id: 0,
            pending_request_id: None,
            issued_any: false,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FetchCommand::Shutdown);
    }

    /// Dispatch a fetch for `query`, superseding whatever was pending.
    pub(crate) fn issue_fetch(&mut self, query: SearchQuery) {
        self.next_request_id = self.next_request_id.saturating_add(1);
        let id = self.next_request_id;
        self.pending_request_id = Some(id);
        self.issued_any = true;
        self.latest_request_id.store(id, AtomicOrdering::Release);
        let _ = self.tx.send(FetchCommand::Fetch { id, query });
    }

    /// Whether `event_id` belongs to the fetch that is still pending.
    pub(crate) fn matches_latest(&self, event_id: u64) -> bool {
        Some(event_id) == self.pending_request_id
    }

    /// Clear the pending slot once its response has been applied.
    pub(crate) fn record_completion(&mut self) {
        self.pending_request_id = None;
    }

    /// True once any fetch has ever been dispatched.
    pub(crate) fn has_issued_fetch(&self) -> bool {
        self.issued_any
    }

    /// The loading flag: a fetch is outstanding and unapplied.
    pub(crate) fn is_in_flight(&self) -> bool {
        self.pending_request_id.is_some()
    }

    pub(crate) fn try_recv(&mut self) -> Result<FetchEvent, TryRecvError> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn runtime() -> (FetchRuntime, Receiver<FetchCommand>) {
        let (tx, command_rx) = mpsc::channel();
        let (_event_tx, rx) = mpsc::channel();
        let runtime = FetchRuntime::new(tx, rx, Arc::new(AtomicU64::new(0)));
        (runtime, command_rx)
    }

    #[test]
    fn issuing_marks_the_fetch_in_flight() {
        let (mut runtime, command_rx) = runtime();
        assert!(!runtime.has_issued_fetch());
        assert!(!runtime.is_in_flight());

        runtime.issue_fetch(SearchQuery::new("BRCA1"));

        assert!(runtime.has_issued_fetch());
        assert!(runtime.is_in_flight());
        assert!(matches!(
            command_rx.try_recv(),
            Ok(FetchCommand::Fetch { id: 1, .. })
        ));
    }

    #[test]
    fn only_the_newest_id_matches() {
        let (mut runtime, _command_rx) = runtime();
        runtime.issue_fetch(SearchQuery::new("BRCA1"));
        runtime.issue_fetch(SearchQuery::new("BRCA2"));

        assert!(!runtime.matches_latest(1));
        assert!(runtime.matches_latest(2));
        assert_eq!(runtime.latest_request_id.load(AtomicOrdering::Acquire), 2);
    }

    #[test]
    fn completion_clears_the_pending_slot() {
        let (mut runtime, _command_rx) = runtime();
        runtime.issue_fetch(SearchQuery::new("TP53"));
        runtime.record_completion();

        assert!(!runtime.is_in_flight());
        assert!(runtime.has_issued_fetch());
        // A duplicate event for an already-applied id is stale too.
        assert!(!runtime.matches_latest(1));
    }
}
