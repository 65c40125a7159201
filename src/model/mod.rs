/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Sign-in models and session state
pub mod auth;
/// HTTP client construction and request helper
pub mod http;
/// Structured query request models
pub mod requests;
/// Query error response models
pub mod responses;
