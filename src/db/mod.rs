//! Database layer.
//!
//! A libsql-backed store holds users, the movie catalog, and the favorites
//! join table. Three backends share one client:
//!
//! - in-memory SQLite (ephemeral, used by tests and `:memory:` configs)
//! - file-based SQLite (default for local development)
//! - remote Turso (requires the `turso` feature)
//!
//! Backend selection happens through [`StoreProvider`].

/// Provider enum for choosing a store backend.
pub mod provider;
/// Fixture movies for an empty catalog.
pub mod seed;
/// The libsql store client.
pub mod store;

pub use provider::StoreProvider;
pub use store::{Store, User};
