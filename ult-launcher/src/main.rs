mod cli;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    // The negotiated redirect owns "/"; everything else (the /zh/ and /en/ site
    // trees) is served straight from the built frontend.
    let router = Router::new().fallback_service(ServeDir::new(cli.dist_dir));
    let router = backend::init(router);

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
