//! Error types for glossary loading and term matching.
//!
//! None of these escape the public load/query surface: loading degrades to an
//! empty catalog and matching degrades to literal text. They exist so the
//! internal steps can use `?` and so diagnostics carry a readable cause.

/// Failure of a single candidate source.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The source answered with a non-success status code.
    Status(u16),
    /// The request never produced a response (offline, CORS, bad URL, ...).
    Network(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug)]
pub enum GlossaryError {
    Fetch(FetchError),
    /// The vocabulary alternation could not be compiled (usually size limits).
    Pattern(regex::Error),
    Config(String),
}

impl std::fmt::Display for GlossaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlossaryError::Fetch(e) => write!(f, "Fetch failed: {}", e),
            GlossaryError::Pattern(e) => write!(f, "Failed to build term pattern: {}", e),
            GlossaryError::Config(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GlossaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlossaryError::Fetch(e) => Some(e),
            GlossaryError::Pattern(e) => Some(e),
            GlossaryError::Config(_) => None,
        }
    }
}

impl From<FetchError> for GlossaryError {
    fn from(e: FetchError) -> Self {
        GlossaryError::Fetch(e)
    }
}

impl From<regex::Error> for GlossaryError {
    fn from(e: regex::Error) -> Self {
        GlossaryError::Pattern(e)
    }
}
