//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Authentication handlers (login, register).
pub mod auth;
/// Movie catalog read handlers.
pub mod movies;
/// User profile and favorites handlers.
pub mod users;
