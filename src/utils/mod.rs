/// Environment variable helpers used to build the configuration
pub mod config;
/// Random identifiers for output files
pub mod id;
/// Logging setup
pub mod logger;

pub use id::*;
pub use logger::*;
