mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod scheduling;
mod seed;
mod store;

use crate::config::AppConfig;
use crate::store::Store;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv().is_err() {
        warn!("No .env file found, using process environment");
    }

    let config = AppConfig::from_env()?;

    let store = web::Data::new(Store::new());
    seed::seed_operatories(&store, config.operatories_csv.as_deref()).await?;
    if let Some(path) = config.appointments_csv.as_deref() {
        seed::seed_appointments(&store, path).await?;
    }

    let schedule = web::Data::new(config.schedule.clone());

    info!("chairtime listening on {}:{}", config.bind, config.port);
    info!("  schedule: {:?}", config.schedule);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(schedule.clone())
            .configure(routes::init)
    })
    .bind((config.bind.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.bind, config.port))?
    .run()
    .await?;

    Ok(())
}
