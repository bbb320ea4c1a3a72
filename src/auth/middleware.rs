use crate::auth::strategy::{AuthStrategy, BearerStrategy};
use crate::db::User;
use crate::types::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

/// Bearer-token middleware for protected routes.
///
/// Runs the [`BearerStrategy`] over the `Authorization` header and injects
/// the resolved [`CurrentUser`] into the request extensions. Requests
/// without a well-formed header are rejected before any business logic
/// runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing authorization header".to_string()))?
        .to_string();

    let strategy = BearerStrategy::new(state.store.clone(), state.tokens.clone());
    let user = strategy.authenticate(auth_header).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// The authenticated identity for the current request.
///
/// Lives in the request extensions for the duration of one request; never
/// persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthenticated("Missing authentication context".to_string()))
    }
}
