/// 1-based number of the first results page.
pub const FIRST_PAGE: u32 = 1;

/// Identifies one logical search request against the variant service.
///
/// A query is a plain value: submitting a term or moving to another page
/// produces a fresh instance, and value equality between instances is what
/// decides whether an in-flight fetch is still worth applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: FIRST_PAGE,
        }
    }
}

impl SearchQuery {
    /// Build the query for a freshly submitted term, starting back at page 1.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: FIRST_PAGE,
        }
    }

    /// Same term, different page. Pages below 1 are clamped up to 1.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            term: self.term.clone(),
            page: page.max(FIRST_PAGE),
        }
    }

    /// The submitted filter text, possibly empty.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// 1-based page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// 0-based page index, the form pagination widgets consume.
    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.page - FIRST_PAGE
    }

    /// The filter term as the wire contract understands it: an empty string
    /// means "no filter" and is omitted from the request entirely.
    #[must_use]
    pub fn normalized_term(&self) -> Option<&str> {
        if self.term.is_empty() {
            None
        } else {
            Some(&self.term)
        }
    }
}
