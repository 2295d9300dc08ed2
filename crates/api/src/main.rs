use std::sync::Arc;

use anyhow::Context;

use corral_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    corral_observability::init();

    let store = Arc::new(Store::new());
    let app = corral_api::app::build_app(store);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
