//! Movie catalog read handlers.
//!
//! The catalog is read-only over HTTP; it is populated by seeding. All
//! routes here sit behind the bearer middleware.

use crate::{
    types::{AppError, Director, Genre, Movie, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

/// List the full movie catalog.
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "All movies in the catalog", body = Vec<Movie>),
        (status = 401, description = "Unauthenticated")
    ),
    tag = "movies",
    security(("bearer" = []))
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>> {
    let movies = state.store.list_movies().await?;

    Ok(Json(movies))
}

/// Get a single movie by title.
#[utoipa::path(
    get,
    path = "/api/movies/{title}",
    params(
        ("title" = String, Path, description = "Exact movie title")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found"),
        (status = 401, description = "Unauthenticated")
    ),
    tag = "movies",
    security(("bearer" = []))
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Movie>> {
    let movie = state
        .store
        .get_movie_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    Ok(Json(movie))
}

/// Get genre details by name.
#[utoipa::path(
    get,
    path = "/api/movies/genres/{name}",
    params(
        ("name" = String, Path, description = "Genre name")
    ),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found"),
        (status = 401, description = "Unauthenticated")
    ),
    tag = "movies",
    security(("bearer" = []))
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Genre>> {
    let genre = state
        .store
        .get_genre(&name)
        .await?
        .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;

    Ok(Json(genre))
}

/// Get director details by name.
#[utoipa::path(
    get,
    path = "/api/movies/directors/{name}",
    params(
        ("name" = String, Path, description = "Director name")
    ),
    responses(
        (status = 200, description = "Director details", body = Director),
        (status = 404, description = "Director not found"),
        (status = 401, description = "Unauthenticated")
    ),
    tag = "movies",
    security(("bearer" = []))
)]
pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Director>> {
    let director = state
        .store
        .get_director(&name)
        .await?
        .ok_or_else(|| AppError::NotFound("Director not found".to_string()))?;

    Ok(Json(director))
}
