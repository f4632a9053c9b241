use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("api_stub=info")),
        )
        .init();

    let addr = std::env::var("API_STUB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let app = api_stub::router(api_stub::AppState::seeded());

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "bind failed");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "api-stub listening, routes under {}", api_stub::API_PREFIX);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
