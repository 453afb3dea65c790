use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;

mod api;
mod auth;
mod config;
mod docs;
mod error;
mod ledger;
mod model;
mod routes;
mod store;

use auth::service::AuthService;
use config::Config;
use ledger::LeaveLedger;
use store::{JsonFileStore, StateStore, SystemClock};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "LeavePilot API"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let store: Arc<dyn StateStore> =
        Arc::new(JsonFileStore::open(&config.data_dir).expect("Failed to open state store"));
    let auth_service =
        Arc::new(AuthService::open(store.clone()).expect("Failed to load user roster"));
    let ledger = Arc::new(
        LeaveLedger::open(store, Arc::new(SystemClock), auth_service.clone())
            .expect("Failed to load leave ledger"),
    );

    // 👇 clone what you need BEFORE moving config
    let server_addr = config.server_addr.clone();
    let config_for_routes = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(config.clone()))
            .app_data(Data::from(auth_service.clone()))
            .app_data(Data::from(ledger.clone()))
            .service(index)
            // Configure auth + protected routes with rate limiting
            .configure(|cfg| routes::configure(cfg, config_for_routes.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
