use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{api, logging, Config, TodoService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config.log_filter);

    let store = config.open_store().context("failed to open todo store")?;
    let cors = api::cors_layer(&config.allowed_origin)
        .with_context(|| format!("invalid allowed origin `{}`", config.allowed_origin))?;
    let app = api::router(TodoService::new(store)).layer(cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener, app).await?;
    Ok(())
}
