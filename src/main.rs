//! Rental quote server binary

use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rentals_web::config::Config;
use rentals_web::pricing::PricingEngine;
use rentals_web::{app, app_with_static, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentals_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("reading configuration")?;
    let policy = config.load_policy().context("loading pricing policy")?;
    let engine = PricingEngine::new(policy).context("building pricing engine")?;
    let state = AppState::new(engine, config.currency.clone());

    let router = match &config.static_dir {
        Some(dir) => {
            tracing::info!("Serving static site from {}", dir.display());
            app_with_static(state, dir)
        }
        None => app(state),
    };

    let router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive()),
    );

    let listener = config.bind().await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
