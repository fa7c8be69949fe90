//! Binary entrypoint for the user API server.
//!
//! Configuration comes from command-line flags or environment variables
//! (see [`ServerConfig`]).

use clap::Parser;

use userapi_server::config::ServerConfig;
use userapi_server::router::build_router;
use userapi_server::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::parse();
    let app = build_router(AppState::seeded());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await
}
