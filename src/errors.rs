use std::error::Error;
use std::fmt;

/// Failure classification for a scrape run. Row-level oddities (bad dates,
/// short rows) are not errors; they are skipped during extraction.
#[derive(Debug)]
pub enum ScrapeError {
    /// The GET failed, returned a non-success status, or the body could not
    /// be read as text.
    Network { url: String, source: anyhow::Error },
    /// The fetched body could not be turned into a document tree. The parser
    /// is tolerant of malformed markup, so this is effectively unreachable
    /// for anything resembling HTML.
    Parse { url: String, details: String },
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Network { url, source } => {
                write!(f, "failed to fetch draw page {url}: {source}")
            }
            ScrapeError::Parse { url, details } => {
                write!(f, "failed to parse draw page {url}: {details}")
            }
        }
    }
}

impl Error for ScrapeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScrapeError::Network { source, .. } => Some(source.as_ref()),
            ScrapeError::Parse { .. } => None,
        }
    }
}
