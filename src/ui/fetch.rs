use std::sync::mpsc::TryRecvError;

use super::App;
use crate::systems::fetch::FetchEvent;

impl<'a> App<'a> {
    /// Dispatch a fetch for the current query.
    pub(crate) fn request_fetch(&mut self) {
        self.fetch.issue_fetch(self.query.clone());
    }

    /// Drain any fetch events waiting on the receiver channel.
    pub(crate) fn pump_fetch_events(&mut self) {
        loop {
            match self.fetch.try_recv() {
                Ok(event) => self.handle_fetch_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Apply one fetch outcome if it still belongs to the pending request.
    ///
    /// A response that lost the race is dropped without touching anything:
    /// the newer request owns the loading flag and the result slot. A failed
    /// response keeps the previous page on screen and surfaces the error
    /// beside the input instead.
    fn handle_fetch_event(&mut self, event: FetchEvent) {
        if !self.fetch.matches_latest(event.id) {
            tracing::trace!(id = event.id, "discarding stale fetch event");
            return;
        }

        match event.outcome {
            Ok(page) => {
                tracing::debug!(
                    term = event.query.term(),
                    page = event.query.page(),
                    count = page.count,
                    "applied results page"
                );
                self.results = Some(page);
                self.last_error = None;
            }
            Err(error) => {
                self.last_error = Some(error);
            }
        }
        self.fetch.record_completion();
        self.ensure_selection();
    }
}
