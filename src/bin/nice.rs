use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nice::server::route_builder::register_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nice=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (app, config) = register_routes()?;
    let addr = config.bind_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
