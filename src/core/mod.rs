//! Business logic: the page source seam and the pagination driver

pub mod paginator;
pub mod traits;

pub use paginator::{Paginator, RunSummary, Termination};
pub use traits::{FetchOutcome, PageSource, PaginationReporter};
