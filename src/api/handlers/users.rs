//! User profile and favorites handlers.
//!
//! Every route here names a target user in the path. The ownership guard
//! runs first in each handler, before any lookup on the named resources, so
//! a caller holding a token for one identity learns nothing about another.

use crate::{
    auth::{guard::ensure_owner, middleware::CurrentUser},
    db::User,
    types::{AppError, Result, UpdateUserRequest, UserProfile},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

async fn profile_of(state: &AppState, user: User) -> Result<UserProfile> {
    let favorites = state.store.get_favorites(&user.id).await?;

    Ok(UserProfile {
        id: user.id,
        username: user.username,
        email: user.email,
        birthday: user.birthday,
        favorites,
    })
}

/// Get the caller's profile.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(
        ("username" = String, Path, description = "Username named in the path; must be the caller")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not the named user")
    ),
    tag = "users",
    security(("bearer" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>> {
    ensure_owner(&user, &username)?;

    Ok(Json(profile_of(&state, user).await?))
}

/// Update the caller's profile.
///
/// Absent fields keep their current values; a new password is re-hashed
/// before it is stored.
#[utoipa::path(
    put,
    path = "/api/users/{username}",
    params(
        ("username" = String, Path, description = "Username named in the path; must be the caller")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not the named user"),
        (status = 409, description = "New username already taken")
    ),
    tag = "users",
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>> {
    ensure_owner(&user, &username)?;

    if let Some(new_username) = &payload.username {
        if new_username.trim().is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
    }
    if let Some(new_password) = &payload.password {
        if new_password.len() < 8 {
            return Err(AppError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
    }

    let new_username = payload.username.unwrap_or_else(|| user.username.clone());
    let password_hash = match payload.password {
        // Password changes go through the same hasher as registration.
        Some(plaintext) => state.passwords.hash(&plaintext)?,
        None => user.password_hash.clone(),
    };
    let email = payload.email.unwrap_or_else(|| user.email.clone());
    let birthday = payload.birthday.or(user.birthday);

    // Same pre-check-plus-constraint arrangement as registration.
    if new_username != user.username
        && state
            .store
            .get_user_by_username(&new_username)
            .await?
            .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    state
        .store
        .update_user(&user.id, &new_username, &password_hash, &email, birthday)
        .await?;

    let favorites = state.store.get_favorites(&user.id).await?;

    Ok(Json(UserProfile {
        id: user.id,
        username: new_username,
        email,
        birthday,
        favorites,
    }))
}

/// Deregister the caller.
#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(
        ("username" = String, Path, description = "Username named in the path; must be the caller")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not the named user")
    ),
    tag = "users",
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
) -> Result<StatusCode> {
    ensure_owner(&user, &username)?;

    state.store.delete_user(&user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a movie to the caller's favorites.
#[utoipa::path(
    post,
    path = "/api/users/{username}/movies/{movie_id}",
    params(
        ("username" = String, Path, description = "Username named in the path; must be the caller"),
        ("movie_id" = String, Path, description = "Id of the movie to add")
    ),
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not the named user"),
        (status = 404, description = "Movie not found")
    ),
    tag = "users",
    security(("bearer" = []))
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<Json<UserProfile>> {
    // Ownership before existence: a non-owner gets 403 here, never a 404
    // that would reveal whether the movie exists.
    ensure_owner(&user, &username)?;

    if state.store.get_movie_by_id(&movie_id).await?.is_none() {
        return Err(AppError::NotFound("Movie not found".to_string()));
    }

    state.store.add_favorite(&user.id, &movie_id).await?;

    Ok(Json(profile_of(&state, user).await?))
}

/// Remove a movie from the caller's favorites.
///
/// Removing a movie that was never a favorite succeeds with no effect.
#[utoipa::path(
    delete,
    path = "/api/users/{username}/movies/{movie_id}",
    params(
        ("username" = String, Path, description = "Username named in the path; must be the caller"),
        ("movie_id" = String, Path, description = "Id of the movie to remove")
    ),
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller is not the named user")
    ),
    tag = "users",
    security(("bearer" = []))
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<Json<UserProfile>> {
    ensure_owner(&user, &username)?;

    state.store.remove_favorite(&user.id, &movie_id).await?;

    Ok(Json(profile_of(&state, user).await?))
}
