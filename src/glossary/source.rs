//! Term sources and candidate fallback.

use std::collections::HashMap;

use crate::error::FetchError;

/// A fetch-like capability: raw text for a location, or an error.
///
/// Futures are not required to be `Send`; the browser implementation holds
/// JS handles across awaits.
#[allow(async_fn_in_trait)]
pub trait TermSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// In-memory source keyed by location. Unknown locations answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, Result<String, FetchError>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: &str, body: &str) -> Self {
        self.documents.insert(location.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_failure(mut self, location: &str, error: FetchError) -> Self {
        self.documents.insert(location.to_string(), Err(error));
        self
    }
}

impl TermSource for StaticSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.documents
            .get(location)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

/// Try each candidate in order and return the first successful body with its
/// location. `None` when every candidate failed.
pub async fn fetch_first<S: TermSource>(source: &S, candidates: &[String]) -> Option<(String, String)> {
    for location in candidates {
        match source.fetch(location).await {
            Ok(body) => return Some((location.clone(), body)),
            Err(e) => log::debug!("[Glossary] Source {} failed: {}", location, e),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn candidates(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_success_wins() {
        let source = StaticSource::new()
            .with_document("b.csv", "second")
            .with_document("c.csv", "third");

        let hit = block_on(fetch_first(&source, &candidates(&["a.csv", "b.csv", "c.csv"])));
        assert_eq!(hit, Some(("b.csv".to_string(), "second".to_string())));
    }

    #[test]
    fn test_network_failure_advances() {
        let source = StaticSource::new()
            .with_failure("a.csv", FetchError::Network("offline".to_string()))
            .with_document("b.csv", "ok");

        let hit = block_on(fetch_first(&source, &candidates(&["a.csv", "b.csv"])));
        assert_eq!(hit.map(|(loc, _)| loc), Some("b.csv".to_string()));
    }

    #[test]
    fn test_all_fail() {
        let source = StaticSource::new().with_failure("a.csv", FetchError::Status(500));
        assert_eq!(block_on(fetch_first(&source, &candidates(&["a.csv", "b.csv"]))), None);
        assert_eq!(block_on(fetch_first(&source, &[])), None);
    }
}
