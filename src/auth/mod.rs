//! Authentication and Authorization
//!
//! This module provides the authentication infrastructure for the Marquee
//! API: password hashing, JWT issuance and validation, the pluggable
//! authentication strategies, the Axum middleware for protected routes, and
//! the ownership guard for owner-scoped resources.
//!
//! # Module Structure
//!
//! - [`auth::password`](crate::auth::password) - Argon2id password hashing and verification
//! - [`auth::jwt`](crate::auth::jwt) - JWT token encoding, decoding, and claims
//! - [`auth::strategy`](crate::auth::strategy) - Pluggable authentication strategies
//! - [`auth::middleware`](crate::auth::middleware) - Axum layers and extractors for authentication
//! - [`auth::guard`](crate::auth::guard) - Resource ownership checks
//!
//! # Security Properties
//!
//! - **Password Hashing**: Argon2id (memory-hard) with a configurable work
//!   factor; plaintext passwords never leave the login/register handlers
//! - **JWT Tokens**: HS256 signed tokens with a fixed configured expiration;
//!   the server keeps no token state, so validity is signature + expiry only
//! - **Uniform rejections**: unknown-user and wrong-password collapse into
//!   one login error; expired, forged, and orphaned tokens collapse into one
//!   401 class
//! - **Ownership before existence**: owner-scoped routes reject a
//!   non-owner before checking whether the named owner even exists
//!
//! # Usage
//!
//! ## Token Issuance
//!
//! ```ignore
//! use marquee::auth::jwt::AuthService;
//!
//! let tokens = AuthService::new(config.auth.jwt_secret.clone(), config.auth.token_ttl);
//! let response = tokens.issue_token(&user.id)?;
//! ```
//!
//! ## Protecting Routes
//!
//! The bearer middleware validates the presented token, resolves its subject
//! against the store, and injects the resolved [`CurrentUser`] into the
//! request extensions:
//!
//! ```ignore
//! use axum::{middleware, Router};
//!
//! let protected = Router::new()
//!     .route("/movies", get(list_movies))
//!     .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```
//!
//! ## Extracting the Identity in Handlers
//!
//! ```ignore
//! async fn handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
//!     format!("Hello, {}!", user.username)
//! }
//! ```
//!
//! [`CurrentUser`]: crate::auth::middleware::CurrentUser

/// Resource ownership checks for owner-scoped routes.
pub mod guard;
/// JWT token generation and validation.
pub mod jwt;
/// Authentication middleware and extractors for protected routes.
pub mod middleware;
/// Argon2id password hashing and verification.
pub mod password;
/// Pluggable authentication strategies (password login, bearer token).
pub mod strategy;
