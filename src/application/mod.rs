/// Sign-in against the identity service
pub mod auth;
/// Authenticated document client with the escalation flow
pub mod client;
/// Application configuration module
pub mod config;
/// Poll-until-changed loop
pub mod monitor;
/// Structured query execution
pub mod query;
