//! raffle-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use raffle_gateway::api;
use raffle_gateway::app_state::AppState;
use raffle_gateway::config::RaffleConfig;
use raffle_gateway::domain::{EventBus, SpinParams};
use raffle_gateway::persistence::PostgresStore;
use raffle_gateway::service::RaffleService;
use raffle_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RaffleConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting raffle-gateway");

    // Connect the database pool and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.database_idle_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Build domain + service layer
    let event_bus = EventBus::new(config.event_bus_capacity);
    let spin_params = SpinParams {
        min_turns: config.spin_min_turns,
        max_turns: config.spin_max_turns,
        duration: config.spin_duration(),
    };
    let raffle_service = Arc::new(RaffleService::new(
        PostgresStore::new(pool),
        event_bus.clone(),
        spin_params,
        config.default_prize_name.clone(),
    ));

    // Build application state
    let app_state = AppState {
        raffle_service,
        event_bus,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
