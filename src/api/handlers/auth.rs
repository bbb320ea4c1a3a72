use crate::{
    auth::strategy::{AuthStrategy, Credentials, PasswordStrategy},
    types::{AppError, LoginRequest, RegisterRequest, Result, TokenResponse, UserProfile},
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserProfile),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    // Validate input
    if payload.username.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and email are required".to_string(),
        ));
    }
    if payload.password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Friendlier message for the common case. Two racing registrations can
    // both pass this check; the store's UNIQUE constraint is the
    // authoritative guard and surfaces the same conflict.
    if state
        .store
        .get_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    // Hash password
    let password_hash = state.passwords.hash(&payload.password)?;

    // Create user
    let user_id = Uuid::new_v4().to_string();
    state
        .store
        .create_user(
            &user_id,
            &payload.username,
            &password_hash,
            &payload.email,
            payload.birthday,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserProfile {
            id: user_id,
            username: payload.username,
            email: payload.email,
            birthday: payload.birthday,
            favorites: Vec::new(),
        }),
    ))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let strategy = PasswordStrategy::new(state.store.clone(), state.passwords.clone());

    let user = strategy
        .authenticate(Credentials {
            username: payload.username,
            password: payload.password,
        })
        .await?;

    // A token is minted only after the credential check fully succeeds.
    let tokens = state.tokens.issue_token(&user.id)?;

    Ok(Json(tokens))
}
