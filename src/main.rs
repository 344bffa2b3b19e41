use anyhow::Context;

mod config;
mod http;
mod route;
mod telemetry;
mod util;

use crate::http::routes::AppState;
use crate::util::id::{RandomSource, RngSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    let routes = route::page_routes().context("building page routes")?;
    let random: Box<dyn RandomSource> = match config::rng_seed()? {
        Some(seed) => {
            tracing::warn!(seed, "room ids are seeded and predictable");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::from_entropy()),
    };
    let state = AppState::new(routes, random);

    let app = http::router(state, config::static_dir());

    let addr = config::server_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
