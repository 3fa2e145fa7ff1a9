// ABOUTME: Library root for weblift - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod output;
pub mod request;
pub mod types;
