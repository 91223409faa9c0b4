//! Main entry point for the backend server.
//!
//! Initializes logging, reads the bind configuration and launches the HTTP server
//! with the game catalogue and one WebSocket endpoint per game.

use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;

use math_and_path::config::server::ServerConfig;
use math_and_path::server::router;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    info!("[Server] Listening on {}:{}", config.host, config.port);

    HttpServer::new(|| {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .configure(router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
