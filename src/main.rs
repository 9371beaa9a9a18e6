mod backend;
mod carousel;
mod config;
mod error;
mod handlers;
mod models;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::load()?;
    let bind = (config.host.clone(), config.port);
    info!(
        backend = %config.backend_url,
        theme = config.theme.as_str(),
        "starting soulbuddy web"
    );

    let state = web::Data::new(AppState::new(config)?);
    let app_state = state.clone();

    HttpServer::new(move || App::new().app_data(app_state.clone()).configure(routes::init))
        .bind(&bind)
        .with_context(|| format!("Failed to bind {}:{}", bind.0, bind.1))?
        .run()
        .await?;

    state.carousel.stop();
    info!("server stopped");
    Ok(())
}
