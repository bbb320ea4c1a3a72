//! Marquee server binary.
//!
//! Parses the CLI, loads configuration from the environment, opens the
//! store, and serves the API.

use anyhow::Context;
use axum::{routing::get, Router};
use marquee::auth::{jwt::AuthService, password::PasswordService};
use marquee::cli::{output::Output, Cli, Commands};
use marquee::db::{seed, StoreProvider};
use marquee::utils::config::Config;
use marquee::{api, AppState};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    init_tracing(cli.verbose);

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e} (is JWT_SECRET set?)"))?;

    match cli.command {
        Some(Commands::Config) => show_config(&config, &output),
        Some(Commands::Seed) => seed_database(&config, &output).await,
        None => serve(config, output).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "marquee=debug,marquee_server=debug,tower_http=debug"
    } else {
        "marquee=info,marquee_server=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn show_config(config: &Config, output: &Output) -> anyhow::Result<()> {
    output.info("Resolved configuration:");
    output.config_line("host", &config.server.host);
    output.config_line("port", &config.server.port.to_string());
    output.config_line("database", &config.database.url);
    output.config_line("jwt_secret", "<redacted>");
    output.config_line("token_ttl", &format!("{}s", config.auth.token_ttl));
    output.config_line(
        "argon2",
        &format!(
            "m={} KiB, t={}, p={}",
            config.auth.argon2_memory_kib,
            config.auth.argon2_iterations,
            config.auth.argon2_parallelism
        ),
    );

    Ok(())
}

async fn seed_database(config: &Config, output: &Output) -> anyhow::Result<()> {
    let store = StoreProvider::from_config(&config.database)
        .create()
        .await
        .context("failed to open store")?;

    let inserted = seed::seed_catalog(&store)
        .await
        .context("failed to seed catalog")?;

    if inserted > 0 {
        output.success(&format!("Seeded {} movies", inserted));
    } else {
        output.info("Catalog already populated; nothing to do");
    }

    Ok(())
}

async fn serve(config: Config, output: Output) -> anyhow::Result<()> {
    output.banner();

    let store = Arc::new(
        StoreProvider::from_config(&config.database)
            .create()
            .await
            .context("failed to open store")?,
    );

    seed::seed_catalog(&store)
        .await
        .context("failed to seed catalog")?;

    let passwords = Arc::new(
        PasswordService::new(
            config.auth.argon2_memory_kib,
            config.auth.argon2_iterations,
            config.auth.argon2_parallelism,
        )
        .context("invalid Argon2 configuration")?,
    );
    let tokens = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl,
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        store,
        passwords,
        tokens,
    };

    let app = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest("/api", api::routes::create_router(state.clone()));

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/swagger-ui/openapi.json", api::ApiDoc::openapi()),
        )
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "marquee server listening");
    output.success(&format!("Listening on http://{}", addr));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

async fn welcome() -> &'static str {
    "Welcome to Marquee!"
}

async fn health() -> &'static str {
    "OK"
}
