use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use gitmatch::config::{CorsSettings, LoggingSettings, Settings};
use gitmatch::core::Matcher;
use gitmatch::routes::{self, AppState};
use gitmatch::services::{GitHubClient, ProfileCache, RecentUsers};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting GitMatch service...");

    let github = match GitHubClient::new(&settings.github) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize GitHub client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    info!(
        "GitHub client initialized ({}, timeout {}s, authenticated: {})",
        settings.github.api_base,
        settings.github.timeout_secs,
        settings.github.token.is_some()
    );

    let cache = Arc::new(ProfileCache::new(settings.cache.max_entries, settings.cache.ttl_secs));

    info!(
        "Profile cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let recent = Arc::new(RecentUsers::new(settings.recent.capacity));

    let app_state = AppState {
        github,
        cache,
        recent,
        matcher: Matcher::new(),
        recent_limit: settings.recent.list_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

/// Initialize the tracing subscriber; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn build_cors(settings: &CorsSettings) -> Cors {
    if settings.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
