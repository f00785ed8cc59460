use std::sync::Arc;

use auth::Authenticator;
use blog_service::config::Config;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::outbound::repositories::MemoryBlogRepository;
use blog_service::outbound::repositories::MemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let user_repository = Arc::new(MemoryUserRepository::new());
    let blog_repository = Arc::new(MemoryBlogRepository::new());

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let blog_service = Arc::new(BlogService::new(blog_repository, user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(blog_service, user_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
