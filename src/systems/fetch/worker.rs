use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::client::VariantSource;
use super::commands::{FetchCommand, FetchEvent};

/// Launches the background fetch worker thread and returns communication
/// channels plus the shared id cell used to mark requests as superseded.
pub(crate) fn spawn(
    source: impl VariantSource,
) -> (Sender<FetchCommand>, Receiver<FetchEvent>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    let latest_request_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_request_id);

    thread::spawn(move || worker_loop(&source, command_rx, event_tx, &thread_latest));

    (command_tx, event_rx, latest_request_id)
}

fn worker_loop(
    source: &impl VariantSource,
    command_rx: Receiver<FetchCommand>,
    event_tx: Sender<FetchEvent>,
    latest_request_id: &AtomicU64,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(source, &event_tx, latest_request_id, command) {
            break;
        }
    }
}

fn handle_command(
    source: &impl VariantSource,
    event_tx: &Sender<FetchEvent>,
    latest_request_id: &AtomicU64,
    command: FetchCommand,
) -> bool {
    match command {
        FetchCommand::Fetch { id, query } => {
            // A newer request may already be queued behind this one; skip the
            // network round-trip when the id is no longer current. The UI
            // performs the same check on receipt, which stays authoritative.
            if latest_request_id.load(Ordering::Acquire) != id {
                tracing::trace!(id, "skipping superseded fetch");
                return true;
            }
            let outcome = source.search(&query);
            match &outcome {
                Ok(page) => tracing::debug!(id, count = page.count, "fetch completed"),
                Err(err) => tracing::warn!(id, error = %err, "fetch failed"),
            }
            event_tx.send(FetchEvent { id, query, outcome }).is_ok()
        }
        FetchCommand::Shutdown => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::query::SearchQuery;
    use crate::records::{VariantPage, VariantRecord};
    use crate::systems::fetch::FetchError;

    fn sample_page(count: u64, genes: &[&str]) -> VariantPage {
        VariantPage {
            count,
            results: genes
                .iter()
                .map(|gene| VariantRecord {
                    gene: (*gene).to_string(),
                    ..VariantRecord::default()
                })
                .collect(),
        }
    }

    struct StubSource {
        outcome: Result<VariantPage, FetchError>,
    }

    impl VariantSource for StubSource {
        fn search(&self, _query: &SearchQuery) -> Result<VariantPage, FetchError> {
            self.outcome.clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Arc<Mutex<Vec<SearchQuery>>>,
    }

    impl VariantSource for RecordingSource {
        fn search(&self, query: &SearchQuery) -> Result<VariantPage, FetchError> {
            self.calls.lock().unwrap().push(query.clone());
            Ok(sample_page(1, &[query.term()]))
        }
    }

    #[test]
    fn shutdown_command_stops_worker() {
        let source = StubSource {
            outcome: Ok(VariantPage::default()),
        };
        let (tx, _rx, latest) = spawn(source);
        assert_eq!(latest.load(Ordering::Relaxed), 0);
        tx.send(FetchCommand::Shutdown).unwrap();
    }

    #[test]
    fn fetch_outcomes_are_forwarded_with_their_id() {
        let source = StubSource {
            outcome: Ok(sample_page(42, &["TP53"])),
        };
        let (command_tx, event_rx, latest) = spawn(source);

        latest.store(1, Ordering::Release);
        command_tx
            .send(FetchCommand::Fetch {
                id: 1,
                query: SearchQuery::new("TP53"),
            })
            .expect("send fetch");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("receive fetch event");

        assert_eq!(event.id, 1);
        assert_eq!(event.query, SearchQuery::new("TP53"));
        let page = event.outcome.expect("successful outcome");
        assert_eq!(page.count, 42);
        assert_eq!(page.results[0].gene, "TP53");

        command_tx
            .send(FetchCommand::Shutdown)
            .expect("send shutdown");
    }

    #[test]
    fn failures_are_forwarded_as_events() {
        let source = StubSource {
            outcome: Err(FetchError::Status {
                status: 502,
                url: "http://localhost:8000/variants/?page=1".to_string(),
            }),
        };
        let (command_tx, event_rx, latest) = spawn(source);

        latest.store(1, Ordering::Release);
        command_tx
            .send(FetchCommand::Fetch {
                id: 1,
                query: SearchQuery::default(),
            })
            .expect("send fetch");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("receive fetch event");
        assert!(matches!(
            event.outcome,
            Err(FetchError::Status { status: 502, .. })
        ));

        command_tx
            .send(FetchCommand::Shutdown)
            .expect("send shutdown");
    }

    #[test]
    fn superseded_commands_are_skipped_without_a_fetch() {
        let source = RecordingSource::default();
        let calls = Arc::clone(&source.calls);
        let (command_tx, event_rx, latest) = spawn(source);

        // Both commands are queued before the worker runs either; only the
        // one matching the latest id reaches the source.
        latest.store(2, Ordering::Release);
        command_tx
            .send(FetchCommand::Fetch {
                id: 1,
                query: SearchQuery::new("BRCA1"),
            })
            .expect("send first fetch");
        command_tx
            .send(FetchCommand::Fetch {
                id: 2,
                query: SearchQuery::new("BRCA2"),
            })
            .expect("send second fetch");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("receive fetch event");
        assert_eq!(event.id, 2);
        assert_eq!(calls.lock().unwrap().as_slice(), &[SearchQuery::new("BRCA2")]);

        command_tx
            .send(FetchCommand::Shutdown)
            .expect("send shutdown");
    }
}
