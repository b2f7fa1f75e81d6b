use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diary::api::{create_router, AppState};
use diary::config::Config;
use diary::db::{Database, DatabaseBackend, LibSqlBackend};
use diary::services::WeatherRefreshManager;
use diary::weather::WeatherClient;

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Self-hostable diary service that records the day's weather")]
struct Args {
    /// Do not schedule the daily weather refresh
    #[arg(long)]
    no_weather_refresh: bool,

    /// Fetch and store today's weather once at startup
    #[arg(long)]
    refresh_weather_now: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diary=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.weather.api_key.is_none() {
        tracing::warn!(
            "OPENWEATHERMAP_KEY is not set. Creating diary entries for dates without cached weather will fail."
        );
    }

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));

    tracing::info!(
        location = %config.weather.location,
        timeout_secs = config.weather.timeout_secs,
        "Initializing weather client..."
    );
    let weather = WeatherClient::new(&config.weather)?;

    let state = AppState::new(config.clone(), db, weather);
    let manager = WeatherRefreshManager::new(state.diary.clone(), config.scheduler.refresh_hour);

    if args.refresh_weather_now {
        if let Err(e) = manager.run_once().await {
            tracing::error!("Startup weather refresh failed: {}", e);
        }
    }

    let cancel_token = CancellationToken::new();

    if config.scheduler.enabled && !args.no_weather_refresh {
        tracing::info!(
            "Starting weather refresh manager... (daily at {:02}:00 local time)",
            manager.refresh_hour()
        );
        let token = cancel_token.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!("Weather refresh manager shutting down...");
                        break;
                    }
                    _ = tokio::time::sleep(manager.next_delay()) => {
                        if let Err(e) = manager.run_once().await {
                            tracing::error!("Weather refresh error: {}", e);
                        }
                    }
                }
            }
        });
    } else {
        tracing::info!("Daily weather refresh disabled");
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Diary starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
