// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;
mod storage;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use errors::ApiError;
use std::io;
use storage::FileStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting openstay-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Open the storage collaborator
    let store = if config.storage_file.is_empty() {
        log::warn!("Running with in-memory storage only");
        FileStore::ephemeral()
    } else {
        match FileStore::open(&config.storage_file) {
            Ok(store) => store,
            Err(e) => {
                log::error!("Failed to open storage file: {}", e);
                std::process::exit(1);
            }
        }
    };
    let store = web::Data::new(store);

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (storage collaborator)
            .app_data(store.clone())
            // A body that does not parse as JSON is the same client error as
            // a non-object body
            .app_data(
                web::JsonConfig::default().error_handler(|_, _| ApiError::NotAJson.into()),
            )
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .service(
                web::scope("/api/v1")
                    .configure(handlers::index_config::<FileStore>)
                    .configure(handlers::states_config::<FileStore>)
                    .configure(handlers::cities_config::<FileStore>)
                    .configure(handlers::amenities_config::<FileStore>)
                    .configure(handlers::users_config::<FileStore>)
                    .configure(handlers::places_config::<FileStore>)
                    .configure(handlers::place_amenities_config::<FileStore>)
                    .configure(handlers::reviews_config::<FileStore>),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
