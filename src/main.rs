use std::sync::Arc;

use razzies::{AppState, build_router, catalog::Catalog, config::Config, db, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,razzies=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;
    seed::load_from_path(&db, &config.seed_path).await?;

    let catalog = Catalog::new(db);
    let counts = catalog.counts().await?;
    tracing::info!(
        movies = counts.movies,
        studios = counts.studios,
        producers = counts.producers,
        "catalog ready"
    );

    let state = Arc::new(AppState { config: config.clone(), catalog });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
