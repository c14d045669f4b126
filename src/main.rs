use actix_web::{web, App, HttpServer};
use genprompt::{
    logger::{self, LoggerConfig},
    server::{self, AppState},
    Config, FavoritesManager, FileFavoritesStorage, PromptComposer, TextClient,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    let logger_config = if config.json_logs {
        LoggerConfig::production()
    } else {
        LoggerConfig::development()
    };
    logger::init_with_config(logger_config)?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let (host, port) = config.bind_address();
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &host, port);
    logger::log_config_info(&config);

    let client = TextClient::new(config.gemini.clone())?;
    let composer = PromptComposer::new(Arc::new(client));

    let storage = Arc::new(FileFavoritesStorage::new(&config.favorites_path));
    let favorites = match FavoritesManager::load(storage).await {
        Ok(favorites) => favorites,
        Err(e) => {
            log::error!("❌ Failed to load favorites: {}", e);
            return Err(e.into());
        }
    };

    let state = web::Data::new(AppState::new(composer, favorites));

    HttpServer::new(move || App::new().app_data(state.clone()).configure(server::configure))
        .bind((host.as_str(), port))?
        .run()
        .await?;

    log::info!("👋 Server stopped");
    Ok(())
}
