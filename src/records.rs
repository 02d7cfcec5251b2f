use serde::Deserialize;

/// One page of search results as served by the variant endpoint.
///
/// `count` is the total number of records matching the query across all
/// pages, not the length of `results`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VariantPage {
    pub count: u64,
    pub results: Vec<VariantRecord>,
}

impl VariantPage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A single variant record in the shape the service serializes it.
///
/// Fields are carried opaquely: the UI renders a subset and never interprets
/// the genomic payload. Missing fields decode to their defaults so schema
/// drift on the server does not break the listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VariantRecord {
    pub accession: String,
    pub alias: String,
    pub alt: String,
    pub assembly: String,
    pub chr: String,
    pub gene: String,
    pub genomic_start: String,
    pub genomic_stop: String,
    pub inferred_classification: String,
    pub last_evaluated: Option<String>,
    pub last_updated: Option<String>,
    pub nucleotide_change: String,
    pub other_mappings: String,
    pub protein_change: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub region: String,
    pub reported_alt: String,
    pub reported_classification: String,
    pub reported_ref: String,
    pub source: String,
    pub submitter_comment: String,
    pub transcripts: String,
    pub url: String,
}
