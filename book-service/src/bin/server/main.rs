use std::sync::Arc;

use book_service::config::Config;
use book_service::domain::book::service::BookService;
use book_service::inbound::http::router::create_router;
use book_service::outbound::repositories::InMemoryBookRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "book-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    // The catalog is process-wide and resets on restart
    let book_repository = Arc::new(InMemoryBookRepository::with_sample_catalog());
    let book_service = Arc::new(BookService::new(book_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(book_service);

    axum::serve(http_listener, application).await?;

    Ok(())
}
