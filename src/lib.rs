//! Instafetch - a cursor-paginated Instagram media fetcher with a
//! write-through cache.
//!
//! This crate walks an account's paginated media listing, selects the
//! highest-resolution image URL for every item, orders the result newest
//! first and caches the finished list keyed by account and limit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "instafetch";
