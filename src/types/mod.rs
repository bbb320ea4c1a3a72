use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Catalog Types =============

/// A movie in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Unique movie identifier
    pub id: String,
    /// Movie title, unique within the catalog
    pub title: String,
    /// Short plot description
    pub description: String,
    /// Genre the movie belongs to
    pub genre: Genre,
    /// Director of the movie
    pub director: Director,
    /// Poster or cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the movie is featured on the landing page
    pub featured: bool,
}

/// A movie genre with a short description.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

/// A movie director.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Director {
    pub name: String,
    pub bio: String,
    /// Year of birth, where known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,
}

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issued bearer token. Returned only after a successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

/// Public view of a user account. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    /// Ids of the user's favorite movies
    pub favorites: Vec<String>,
}

// ============= Authentication Types =============

/// JWT payload: subject (user id), issued-at, and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad username or password at login. Unknown-user and wrong-password
    /// deliberately collapse into this one variant.
    #[error("Incorrect username or password")]
    IncorrectCredentials,

    /// Missing, malformed, expired, or forged token, or a token whose
    /// subject no longer exists.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated, but not the owner of the path-named resource.
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self {
            AppError::IncorrectCredentials => (
                StatusCode::UNAUTHORIZED,
                "Incorrect username or password".to_string(),
            ),
            AppError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::PermissionDenied => {
                (StatusCode::FORBIDDEN, "Permission denied".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // Store and internal failures are logged in full but surfaced
            // generically, so clients can tell "try again later" from
            // "fix your credentials" without seeing internals.
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service temporarily unavailable".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
