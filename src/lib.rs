/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # firestore-peek
//!
//! A small client for reading documents out of a Firestore project from the
//! command line.
//!
//! A run signs in anonymously against the identity service, issues one
//! structured query for a collection and writes the JSON result either to a
//! randomly named file or to standard output. When the anonymous token is
//! rejected with `UNAUTHENTICATED` or `PERMISSION_DENIED`, the client signs in
//! with the email/password pair supplied on the command line and retries the
//! query once.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use firestore_peek::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Arc::new(Config::new());
//! let client = Client::new(config, "https://my-app.example.com")?;
//! let request = QueryRequest::new("messages", Limit::Count(10), true)?;
//!
//! let outcome = client.fetch(&request, None).await?;
//! OutputWriter::new(Destination::Terminal).write(&outcome.payload)?;
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, authentication, querying and monitoring
pub mod application;
/// Command-line driver
pub mod cli;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models for the identity and document endpoints
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Output of fetched documents
pub mod presentation;
/// Environment, id and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
