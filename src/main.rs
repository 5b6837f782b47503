use tracing::{error, info};

use kaplar_login::{AppState, Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = kaplar_login::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        kaplar_login::logging::init_console_only(&config.logging.level);
    }

    info!("Kaplar Login Server");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let db = match Database::open(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "World \"{}\" at {}:{} ({}, {})",
        config.world.name,
        config.world.host,
        config.world.port,
        config.world.location,
        config.world.pvp_type
    );
    info!(
        "Password hashes: {}, session keys: {:?}",
        config.auth.hash_algorithm, config.auth.session_key
    );

    let server = match WebServer::new(&config.server, AppState::from_config(db, &config)) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Login server stopped: {}", e);
        std::process::exit(1);
    }
}
