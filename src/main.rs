//! Vivero API server: reads settings from env, opens the store pool, serves the router.

use tokio::net::TcpListener;
use vivero_api::{app, AppConfig, AppState, PgStore, OPENAPI_PATH};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vivero_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // An unreachable store does not stop the server; requests answer 500 until it comes back.
    let store = match PgStore::connect(&config).await {
        Ok(store) => {
            tracing::info!("connected to database");
            store
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "database connection failed");
            PgStore::connect_lazy(&config)?
        }
    };

    let router = app(AppState::new(store));
    let listener = TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!("listening on http://{}", addr);
    tracing::info!("api docs at http://{}{}", addr, OPENAPI_PATH);
    axum::serve(listener, router).await?;
    Ok(())
}
