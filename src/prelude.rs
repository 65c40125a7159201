/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types, re-exported for `use firestore_peek::prelude::*;`.

// ============================================================================
// CONFIGURATION AND ERRORS
// ============================================================================

pub use crate::application::config::{Config, EndpointConfig, HttpConfig, ProjectCredentials};
pub use crate::error::{AppError, SignInMethod};
pub use crate::{VERSION, version};

// ============================================================================
// AUTHENTICATION AND QUERYING
// ============================================================================

pub use crate::application::auth::Auth;
pub use crate::application::client::{Client, FetchOutcome};
pub use crate::application::monitor::{Change, monitor_until_changed};
pub use crate::application::query::QueryExecutor;
pub use crate::model::auth::{AuthState, PasswordCredentials, Session};
pub use crate::model::requests::{Limit, QueryRequest};

// ============================================================================
// OUTPUT AND UTILITIES
// ============================================================================

pub use crate::presentation::output::{Destination, OutputWriter, WriteReport};
pub use crate::utils::logger::setup_logger;
