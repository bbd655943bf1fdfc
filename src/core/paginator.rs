use crate::Result;
use crate::core::traits::{PageSource, PaginationReporter};
use crate::error::FetchError;
use tracing::{debug, info};

pub const FIRST_PAGE: u32 = 1;

/// Why pagination stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// `page` came back empty: every available page has been read
    Exhausted { page: u32 },
    /// Fetching `page` failed; nothing after it was requested
    Failed { page: u32, error: FetchError },
    /// The configured page cap was hit before the endpoint ran dry
    PageLimitReached { limit: u32 },
}

impl Termination {
    pub fn is_failure(&self) -> bool {
        matches!(self, Termination::Failed { .. })
    }

    /// The failure reason, verbatim, if the run ended in error
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Termination::Failed { error, .. } => Some(error.reason()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of fetch calls issued, including the terminating one
    pub pages_fetched: u32,
    pub users_seen: usize,
    pub termination: Termination,
}

#[derive(Debug)]
enum State {
    Fetching { page: u32 },
    Stopped(Termination),
}

/// Drives a `PageSource` from page 1 until an empty page or a failure.
///
/// Fetches are strictly sequential. Without `max_pages` the loop trusts
/// the source to eventually return an empty page or an error.
pub struct Paginator<S: PageSource> {
    source: S,
    max_pages: Option<u32>,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn run<R: PaginationReporter>(&self, reporter: &mut R) -> Result<RunSummary> {
        reporter.run_started()?;

        let mut pages_fetched = 0u32;
        let mut users_seen = 0usize;
        let mut state = State::Fetching { page: FIRST_PAGE };

        let termination = loop {
            state = match state {
                State::Stopped(termination) => break termination,
                State::Fetching { page } => match self.max_pages {
                    Some(limit) if page > limit => {
                        State::Stopped(Termination::PageLimitReached { limit })
                    }
                    _ => {
                        pages_fetched += 1;
                        match self.source.fetch_page(page).await {
                            Ok(users) if users.is_empty() => {
                                debug!("Page {} is empty, end of data", page);
                                State::Stopped(Termination::Exhausted { page })
                            }
                            Ok(users) => {
                                reporter.page_fetched(page, &users)?;
                                users_seen += users.len();
                                match page.checked_add(1) {
                                    Some(next) => State::Fetching { page: next },
                                    None => State::Stopped(Termination::PageLimitReached {
                                        limit: page,
                                    }),
                                }
                            }
                            Err(error) => State::Stopped(Termination::Failed { page, error }),
                        }
                    }
                },
            };
        };

        let summary = RunSummary {
            pages_fetched,
            users_seen,
            termination,
        };
        info!(
            "Pagination finished after {} fetch(es), {} user(s)",
            summary.pages_fetched, summary.users_seen
        );

        reporter.run_finished(&summary)?;
        Ok(summary)
    }
}
