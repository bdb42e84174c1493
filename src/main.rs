use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use hms_backend::{config::AppConfig, database, database::appointments::AppointmentStore, session};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::build_pool(&config.database_url, config.db_pool_size)?;
    let store = web::Data::new(AppointmentStore::new(pool));
    let base_path = web::Data::new(config.base_path.clone());
    let session_key = config.session_key.clone();

    info!("Listening on {} (base path '{}')", config.bind, config.base_path.as_str());

    HttpServer::new(move || {
        App::new()
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(base_path.clone())
            .service(web::scope(base_path.as_str()).configure(session::config))
    })
    .bind(&config.bind)
    .with_context(|| format!("Failed to bind {}", config.bind))?
    .run()
    .await
    .context("Server error")
}
