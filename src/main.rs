use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use clinicare_core::{
    config::seed_file_from_env_value,
    constants::{DEFAULT_REST_ADDR, REST_ADDR_ENV, SEED_FILE_ENV},
    Clinic, CoreConfig,
};

/// Main entry point for the CliniCare backend
///
/// Loads the optional seed document into the in-memory collections and serves the REST API.
///
/// # Environment Variables
/// - `CLINICARE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINICARE_SEED_FILE`: JSON or YAML document loaded at startup (default: none)
/// - `RUST_LOG`: extra tracing directives
///
/// # Errors
/// Returns an error if:
/// - the logging configuration cannot be initialised,
/// - the seed document is missing, malformed or inconsistent,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinicare_run=info".parse()?)
                .add_directive("clinicare_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let seed_file = seed_file_from_env_value(std::env::var(SEED_FILE_ENV).ok());

    let cfg = CoreConfig::new(seed_file)?;
    let clinic = Clinic::from_config(&cfg)?;

    tracing::info!("++ Starting CliniCare REST on {}", rest_addr);

    let app = router(AppState::new(clinic));
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
