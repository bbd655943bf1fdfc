//! # reqres-client
//!
//! Pages through a REST user-listing endpoint (`GET <base_url>?page=<n>`),
//! deserializes each page's `data` array into [`api::models::UserRecord`]s
//! and prints them until a page comes back empty or a fetch fails.
//!
//! ```rust,ignore
//! use reqres_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> reqres_client::Result<()> {
//!     let client = UserClient::new("https://reqres.in/api/users")?;
//!     let mut reporter = ConsoleReporter::new(std::io::stdout(), std::io::stderr(), false);
//!     let summary = Paginator::new(client).run(&mut reporter).await?;
//!     println!("{:?}", summary.termination);
//!     Ok(())
//! }
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Pagination driver
pub mod storage; // Configuration

/// Support modules (used across layers)
pub mod api; // HTTP client and models
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub mod prelude {
    pub use crate::Result;
    pub use crate::api::client::UserClient;
    pub use crate::api::models::UserRecord;
    pub use crate::core::{FetchOutcome, PageSource, Paginator, RunSummary, Termination};
    pub use crate::display::ConsoleReporter;
    pub use crate::error::{AppError, FetchError};
    pub use crate::storage::config::{Config, Settings};
}

pub type Result<T> = std::result::Result<T, AppError>;
