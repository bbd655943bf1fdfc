use crate::Result;
use crate::api::models::UserRecord;
use crate::core::paginator::RunSummary;
use crate::error::FetchError;
use async_trait::async_trait;

/// Result of one fetch attempt: the page's users (possibly none) or the
/// reason the attempt failed. An empty `Ok` means there are no more pages.
pub type FetchOutcome = std::result::Result<Vec<UserRecord>, FetchError>;

/// Anything that can produce one page of users by page number
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page. Implementations make exactly one attempt.
    async fn fetch_page(&self, page: u32) -> FetchOutcome;
}

/// Receives pagination progress for presentation
pub trait PaginationReporter {
    /// Called once before the first fetch
    fn run_started(&mut self) -> Result<()>;
    /// Called for every page that returned at least one user
    fn page_fetched(&mut self, page: u32, users: &[UserRecord]) -> Result<()>;
    /// Called once when pagination has stopped, for whatever reason
    fn run_finished(&mut self, summary: &RunSummary) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct EmptySource {
        calls: AtomicU32,
    }

    #[async_trait]
    impl PageSource for EmptySource {
        async fn fetch_page(&self, _page: u32) -> FetchOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_page_source_through_trait_object() {
        let source = EmptySource {
            calls: AtomicU32::new(0),
        };
        let dyn_source: &dyn PageSource = &source;

        let outcome = dyn_source.fetch_page(1).await;
        assert_eq!(outcome, Ok(Vec::new()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
