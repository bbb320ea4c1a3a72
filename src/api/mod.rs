//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Marquee, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/register` - Register a new user
//! - `POST /api/auth/login` - Login and receive a JWT bearer token
//!
//! ## Movies (`/api/movies`)
//! - `GET /api/movies` - List the full catalog
//! - `GET /api/movies/{title}` - Get one movie by title
//! - `GET /api/movies/genres/{name}` - Get genre details by name
//! - `GET /api/movies/directors/{name}` - Get director details by name
//!
//! ## Users (`/api/users`) — owner-gated
//! - `GET /api/users/{username}` - Get the caller's profile
//! - `PUT /api/users/{username}` - Update profile fields
//! - `DELETE /api/users/{username}` - Deregister
//! - `POST /api/users/{username}/movies/{movie_id}` - Add a favorite
//! - `DELETE /api/users/{username}/movies/{movie_id}` - Remove a favorite
//!
//! # Authentication
//!
//! All movie and user endpoints require a valid JWT in the `Authorization`
//! header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! User endpoints additionally require that the `{username}` in the path is
//! the authenticated caller; anything else is a 403, whether or not the
//! named user exists.
//!
//! # OpenAPI Documentation
//!
//! The OpenAPI document is served at `/api/docs/openapi.json`. With the
//! `swagger-ui` feature enabled, interactive documentation is available at
//! `/swagger-ui/`.

use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document for the Marquee API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::movies::list_movies,
        handlers::movies::get_movie,
        handlers::movies::get_genre,
        handlers::movies::get_director,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::users::add_favorite,
        handlers::users::remove_favorite,
    ),
    components(schemas(
        crate::types::Movie,
        crate::types::Genre,
        crate::types::Director,
        crate::types::RegisterRequest,
        crate::types::LoginRequest,
        crate::types::TokenResponse,
        crate::types::UpdateUserRequest,
        crate::types::UserProfile,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "movies", description = "Movie catalog (protected)"),
        (name = "users", description = "User profiles and favorites (owner-gated)")
    )
)]
pub struct ApiDoc;
