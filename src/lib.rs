//! # Marquee - Movie Catalog Server
//!
//! A movie catalog REST server with JWT authentication and per-user
//! favorites, built on Axum and libsql.
//!
//! ## Overview
//!
//! Marquee can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `marquee-server` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! marquee-server = "0.3"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use marquee::auth::jwt::AuthService;
//! use marquee::auth::password::PasswordService;
//! use marquee::db::Store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::new_memory().await?;
//!     let passwords = PasswordService::new(19456, 2, 1)?;
//!     let tokens = AuthService::new(std::env::var("JWT_SECRET")?, 604800);
//!
//!     let hash = passwords.hash("s3cret-password")?;
//!     store
//!         .create_user("user-1", "alice", &hash, "alice@example.com", None)
//!         .await?;
//!
//!     let issued = tokens.issue_token("user-1")?;
//!     println!("{}", issued.token);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `local-db` | Local SQLite database (default) |
//! | `turso` | Remote Turso database |
//! | `swagger-ui` | Interactive API documentation at `/swagger-ui/` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - Password hashing, JWT tokens, strategies, and guards
//! - [`cli`] - Command-line interface
//! - [`db`] - Store backends (SQLite, Turso) and seed data
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration utilities
//!
//! ## Architecture
//!
//! Authentication is strategy-based: interactive password login and bearer
//! tokens are two implementations of one capability trait, selected
//! explicitly per route. The server holds no token or session state; a
//! token's validity is its signature and expiry alone.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Authentication and authorization.
pub mod auth;
/// Command-line interface.
pub mod cli;
/// Store backends and seed data.
pub mod db;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{Store, StoreProvider};
pub use types::{AppError, Result};
pub use utils::config::Config;

use auth::{jwt::AuthService, password::PasswordService};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Store for users, movies, and favorites
    pub store: Arc<Store>,
    /// Password hashing service
    pub passwords: Arc<PasswordService>,
    /// Token issuance and validation service
    pub tokens: Arc<AuthService>,
}
