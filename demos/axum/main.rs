mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use cors::middleware::cors_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cors_policy=debug")),
        )
        .init();

    let app_state = cors::build_state()?;

    let app = Router::new()
        .route("/greet", get(routes::greet).post(routes::greet))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!("axum demo running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
