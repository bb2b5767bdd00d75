use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use noughts::config::Config;
use noughts::models::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("noughts=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(&config);
    let app = noughts::build_app(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
