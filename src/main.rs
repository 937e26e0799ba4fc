use casting_agency::{
    AppState, Jwks, PostgresRepository, TokenVerifier, VerifierState,
    config::{AppConfig, Env},
    create_router,
    repository::RepositoryState,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point for the application, responsible for
/// initializing all core components: configuration, logging, database, token
/// verification, and the HTTP server.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (fail-fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes the RUST_LOG environment variable, falling back to sensible
    // defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "casting_agency=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability during debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Database Initialization (Postgres)
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("FATAL: Failed to run database migrations.");

    // Instantiate the repository, wrapped in an Arc for thread-safe sharing.
    let repo = Arc::new(PostgresRepository::new(pool)) as RepositoryState;

    // 5. Token Verifier Initialization
    // Local validates HS256 against the configured shared secret; production
    // fetches the identity provider's key set once and validates RS256 against
    // it, enforcing issuer and audience.
    let verifier: VerifierState = match config.env {
        Env::Local => Arc::new(TokenVerifier::from_secret(&config.jwt_secret)),
        Env::Production => {
            let jwks = Jwks::fetch(&config.jwks_url())
                .await
                .expect("FATAL: Failed to fetch JWKS from the identity provider.");
            tracing::info!("Loaded {} signing key(s) from {}", jwks.keys.len(), config.jwks_url());
            Arc::new(TokenVerifier::from_jwks(
                jwks,
                config.issuer(),
                config.audience.clone(),
            ))
        }
    };

    // 6. Unified State Assembly
    let app_state = AppState {
        repo,
        verifier,
        config,
    };

    // 7. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on 0.0.0.0:3000");
    tracing::info!("API Documentation (Swagger UI) available at: http://localhost:3000/swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
