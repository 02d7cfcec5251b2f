use crate::query::SearchQuery;
use crate::records::VariantPage;
use crate::systems::fetch::FetchError;

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
    /// Execute the search described by `query` and report the outcome.
    Fetch {
        /// Identifier that lets the UI correlate responses with the request
        /// that produced them.
        id: u64,
        query: SearchQuery,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Outcome of one fetch command, tagged with the id it was issued under.
#[derive(Debug)]
pub(crate) struct FetchEvent {
    pub id: u64,
    pub query: SearchQuery,
    pub outcome: Result<VariantPage, FetchError>,
}
