use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

/// Builds the `/api` router: public auth and docs routes merged with the
/// protected catalog and user routes behind the bearer middleware.
pub fn create_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route("/auth/register", post(crate::api::handlers::auth::register))
        .route("/auth/login", post(crate::api::handlers::auth::login))
        .route("/docs/openapi.json", get(serve_openapi));

    let protected_routes = Router::new()
        // Catalog routes (auth required)
        .route("/movies", get(crate::api::handlers::movies::list_movies))
        .route(
            "/movies/{title}",
            get(crate::api::handlers::movies::get_movie),
        )
        .route(
            "/movies/genres/{name}",
            get(crate::api::handlers::movies::get_genre),
        )
        .route(
            "/movies/directors/{name}",
            get(crate::api::handlers::movies::get_director),
        )
        // User routes (auth required + ownership guard in the handlers)
        .route(
            "/users/{username}",
            get(crate::api::handlers::users::get_user)
                .put(crate::api::handlers::users::update_user)
                .delete(crate::api::handlers::users::delete_user),
        )
        .route(
            "/users/{username}/movies/{movie_id}",
            post(crate::api::handlers::users::add_favorite)
                .delete(crate::api::handlers::users::remove_favorite),
        )
        .layer(middleware::from_fn_with_state(
            state,
            crate::auth::middleware::auth_middleware,
        ));

    public_routes.merge(protected_routes)
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::api::ApiDoc::openapi())
}
