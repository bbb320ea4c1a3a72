//! End-to-end API tests
//!
//! These run the full router (middleware included) against an in-memory
//! store through axum-test's TestServer.

use axum::{routing::get, Router};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use marquee::{
    auth::{jwt::AuthService, password::PasswordService},
    db::{seed, Store},
    utils::config::{AuthConfig, Config, DatabaseConfig, ServerConfig},
    AppState,
};

const TEST_SECRET: &str = "test_jwt_secret_key_for_testing_only";

// ============= Test Helpers =============

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            turso_url: None,
            turso_auth_token: None,
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            token_ttl: 604800,
            // Minimal legal work factor keeps the suite fast
            argon2_memory_kib: 8,
            argon2_iterations: 1,
            argon2_parallelism: 1,
        },
    }
}

/// Create a test app with an in-memory, seeded store
async fn create_test_app() -> Router {
    let config = test_config();

    let store = Arc::new(
        Store::new_memory()
            .await
            .expect("Failed to create in-memory store"),
    );
    seed::seed_catalog(&store)
        .await
        .expect("Failed to seed catalog");

    let passwords = Arc::new(
        PasswordService::new(
            config.auth.argon2_memory_kib,
            config.auth.argon2_iterations,
            config.auth.argon2_parallelism,
        )
        .expect("valid Argon2 parameters"),
    );
    let tokens = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl,
    ));

    let state = AppState {
        config: Arc::new(config),
        store,
        passwords,
        tokens,
    };

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", marquee::api::routes::create_router(state.clone()))
        .with_state(state)
}

/// Create a test server
async fn create_test_server() -> TestServer {
    let app = create_test_app().await;
    TestServer::new(app).expect("Failed to create test server")
}

/// Register a user and return the response body
async fn register(server: &TestServer, username: &str, password: &str) -> serde_json::Value {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "password": password,
            "email": format!("{}@example.com", username),
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// Login and return the bearer token
async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "username": username,
            "password": password,
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["token"].as_str().expect("token in response").to_string()
}

fn bearer(token: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}

// ============= Health Check Tests =============

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

// ============= Registration Tests =============

#[tokio::test]
async fn test_register_user() {
    let server = create_test_server().await;

    let body = register(&server, "alice", "s3cret!pw").await;

    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body["id"].is_string());
    assert_eq!(body["favorites"], json!([]));

    // The hash must never appear in a response, under any key.
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_short_password() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "short",
            "email": "alice@example.com",
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_missing_username() {
    let server = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "",
            "password": "s3cret!pw",
            "email": "alice@example.com",
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "password": "different-password",
            "email": "other@example.com",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

// ============= Login Tests =============

#[tokio::test]
async fn test_register_and_login() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "s3cret!pw",
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "bearer");
    assert!(body["expires_in"].is_number());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;

    // Wrong password for a real user
    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong-password",
        }))
        .await;
    wrong_password.assert_status_unauthorized();

    // Login as a user that does not exist
    let unknown_user = server
        .post("/api/auth/login")
        .json(&json!({
            "username": "nobody",
            "password": "s3cret!pw",
        }))
        .await;
    unknown_user.assert_status_unauthorized();

    // Same status and same body: no username enumeration through login.
    let wrong_body: serde_json::Value = wrong_password.json();
    let unknown_body: serde_json::Value = unknown_user.json();
    assert_eq!(wrong_body, unknown_body);

    // And no token leaks on either failure.
    assert!(wrong_body.get("token").is_none());
}

// ============= Token Validation Tests =============

#[tokio::test]
async fn test_movies_require_auth() {
    let server = create_test_server().await;

    let response = server.get("/api/movies").await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_wrong_auth_scheme_is_rejected() {
    let server = create_test_server().await;

    let response = server
        .get("/api/movies")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        )
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let server = create_test_server().await;

    let response = server
        .get("/api/movies")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_static("Bearer not.a.jwt"),
        )
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    // Flip the last character of the payload segment
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let payload = &mut parts[1];
    let flipped = if payload.ends_with('A') { "B" } else { "A" };
    payload.replace_range(payload.len() - 1.., flipped);
    let tampered = parts.join(".");

    let response = server
        .get("/api/movies")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&tampered))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let server = create_test_server().await;

    let body = register(&server, "alice", "s3cret!pw").await;
    let user_id = body["id"].as_str().expect("id");

    // Same secret, but the token is already past its expiry.
    let expired_issuer = AuthService::new(TEST_SECRET.to_string(), -3600);
    let expired = expired_issuer.issue_token(user_id).expect("should issue");

    let response = server
        .get("/api/movies")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&expired.token))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_token_for_deleted_user_is_rejected() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .delete("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // The signature is still valid; the subject is gone.
    let response = server
        .get("/api/movies")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_unauthorized();
}

// ============= Catalog Tests =============

#[tokio::test]
async fn test_list_movies() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .get("/api/movies")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_ok();
    let movies: serde_json::Value = response.json();
    assert_eq!(movies.as_array().expect("array of movies").len(), 3);
}

#[tokio::test]
async fn test_get_movie_by_title() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .get("/api/movies/Twilight")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_ok();
    let movie: serde_json::Value = response.json();
    assert_eq!(movie["title"], "Twilight");
    assert_eq!(movie["genre"]["name"], "Romance");
    assert_eq!(movie["director"]["name"], "Catherine Hardwicke");

    let missing = server
        .get("/api/movies/No Such Movie")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    missing.assert_status_not_found();
}

#[tokio::test]
async fn test_get_genre_and_director() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let genre = server
        .get("/api/movies/genres/Fantasy")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    genre.assert_status_ok();
    let genre: serde_json::Value = genre.json();
    assert_eq!(genre["name"], "Fantasy");

    let director = server
        .get("/api/movies/directors/Peter Jackson")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    director.assert_status_ok();
    let director: serde_json::Value = director.json();
    assert_eq!(director["birth"], 1961);

    let missing = server
        .get("/api/movies/genres/Noir")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    missing.assert_status_not_found();
}

// ============= Ownership Tests =============

#[tokio::test]
async fn test_cross_user_mutation_is_denied() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    register(&server, "bob", "bobs-password").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .put("/api/users/bob")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "email": "hijack@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_ownership_is_checked_before_existence() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    // "ghost" is not registered; the caller still gets a plain 403, not a
    // 404 that would reveal the username is free.
    let response = server
        .put("/api/users/ghost")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "email": "x@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}

/// The full register → login → use → cross-user-denied → anonymous-denied
/// walk-through.
#[tokio::test]
async fn test_auth_scenario_end_to_end() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    // Own resources work
    let own = server
        .get("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    own.assert_status_ok();

    // Someone else's path does not, even with a valid token
    let other = server
        .get("/api/users/bob")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    other.assert_status(axum::http::StatusCode::FORBIDDEN);

    // And no header at all short-circuits before anything runs
    let anonymous = server.get("/api/users/alice").await;
    anonymous.assert_status_unauthorized();
}

// ============= Favorites Tests =============

#[tokio::test]
async fn test_add_and_remove_favorite() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let movies = server
        .get("/api/movies")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    let movies: serde_json::Value = movies.json();
    let movie_id = movies[0]["id"].as_str().expect("movie id").to_string();

    // Add
    let response = server
        .post(&format!("/api/users/alice/movies/{}", movie_id))
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();
    let profile: serde_json::Value = response.json();
    assert_eq!(profile["favorites"], json!([movie_id]));

    // Adding again is not an error and does not duplicate
    let response = server
        .post(&format!("/api/users/alice/movies/{}", movie_id))
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();
    let profile: serde_json::Value = response.json();
    assert_eq!(profile["favorites"], json!([movie_id]));

    // Remove
    let response = server
        .delete(&format!("/api/users/alice/movies/{}", movie_id))
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();
    let profile: serde_json::Value = response.json();
    assert_eq!(profile["favorites"], json!([]));

    // Removing a non-favorite is a no-op success
    let response = server
        .delete(&format!("/api/users/alice/movies/{}", movie_id))
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_favorite_unknown_movie_is_not_found() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .post("/api/users/alice/movies/no-such-movie")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_favorites_of_another_user_are_gated() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    register(&server, "bob", "bobs-password").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .post("/api/users/bob/movies/anything")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;

    // 403 before the movie id is even looked at
    response.assert_status(axum::http::StatusCode::FORBIDDEN);
}

// ============= Profile Update Tests =============

#[tokio::test]
async fn test_update_email() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .put("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "email": "new@example.com" }))
        .await;

    response.assert_status_ok();
    let profile: serde_json::Value = response.json();
    assert_eq!(profile["email"], "new@example.com");
    assert_eq!(profile["username"], "alice");
}

#[tokio::test]
async fn test_password_change_rehashes() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .put("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "password": "a-new-password" }))
        .await;
    response.assert_status_ok();

    // Old password no longer works
    let old = server
        .post("/api/auth/login")
        .json(&json!({ "username": "alice", "password": "s3cret!pw" }))
        .await;
    old.assert_status_unauthorized();

    // New one does
    login(&server, "alice", "a-new-password").await;
}

#[tokio::test]
async fn test_username_change() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .put("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "username": "alicia" }))
        .await;
    response.assert_status_ok();

    // The token stays valid (it names the id, not the username); the
    // ownership guard now answers to the new handle.
    let old_path = server
        .get("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    old_path.assert_status(axum::http::StatusCode::FORBIDDEN);

    let new_path = server
        .get("/api/users/alicia")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .await;
    new_path.assert_status_ok();
}

#[tokio::test]
async fn test_username_change_conflict() {
    let server = create_test_server().await;

    register(&server, "alice", "s3cret!pw").await;
    register(&server, "bob", "bobs-password").await;
    let token = login(&server, "alice", "s3cret!pw").await;

    let response = server
        .put("/api/users/alice")
        .add_header(axum::http::header::AUTHORIZATION, bearer(&token))
        .json(&json!({ "username": "bob" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

// ============= OpenAPI Tests =============

#[tokio::test]
async fn test_openapi_document_is_public() {
    let server = create_test_server().await;

    let response = server.get("/api/docs/openapi.json").await;
    response.assert_status_ok();

    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/api/auth/login"].is_object());
}
