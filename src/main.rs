use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use daily_diet::{
    config::Config,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::try_parse().map_err(Error::other)?;
    let server_url = config.server_url();

    info!("Starting server at {}", server_url);

    let state = Arc::new(ApiState::in_memory());
    let app = build_app(state, server_url);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await
}
