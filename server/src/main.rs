use tokio::net::TcpListener;
use todo_plugin_server::{AppState, Config, TodoStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();
    let port = config.port;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ChatGPT Plugin is listening on port {port}");

    todo_plugin_server::run(listener, AppState::new(config, TodoStore::seeded())).await
}
