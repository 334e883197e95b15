use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tp_api::{create_app, AppState, Repositories};
use tp_infra::database::DatabasePool;
use tp_shared::{AppConfig, LogFormat, LoggingConfig};

/// Run against process-local repositories instead of MySQL
const IN_MEMORY_VAR: &str = "TRADEPOST_IN_MEMORY";

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.colored)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

async fn serve<S: Repositories>(state: AppState<S>, config: AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let keep_alive = std::time::Duration::from_secs(config.server.keep_alive);
    let state = web::Data::new(state);

    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &config))
        .keep_alive(keep_alive)
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;
    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await.context("server terminated with an error")
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = tp_infra::load_config().context("failed to load configuration")?;
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting Tradepost API server");
    if config.auth.is_using_default_secret() {
        warn!("AUTH_TOKEN_SECRET is not set; using the built-in development secret");
    }

    let in_memory = std::env::var(IN_MEMORY_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if in_memory {
        warn!("Running with in-memory repositories; data is lost on shutdown");
        return serve(AppState::in_memory(), config).await;
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    database
        .run_migrations()
        .await
        .context("failed to run database migrations")?;

    let result = serve(AppState::mysql(&database), config).await;
    database.close().await;
    result
}
