use std::sync::Arc;

use alumni_service::config::Config;
use alumni_service::domain::event::service::EventService;
use alumni_service::domain::faq::service::FaqService;
use alumni_service::domain::jubilee::service::JubileeService;
use alumni_service::domain::representative::service::RepresentativeService;
use alumni_service::domain::session::service::SessionService;
use alumni_service::domain::session::tokens::TokenIssuer;
use alumni_service::domain::souvenir::service::SouvenirService;
use alumni_service::domain::user::service::UserService;
use alumni_service::inbound::http::router::create_router;
use alumni_service::inbound::http::router::AppState;
use alumni_service::outbound::email::SmtpMailer;
use alumni_service::outbound::repositories::PostgresEventRepository;
use alumni_service::outbound::repositories::PostgresFaqRepository;
use alumni_service::outbound::repositories::PostgresJubileeRepository;
use alumni_service::outbound::repositories::PostgresRepresentativeRepository;
use alumni_service::outbound::repositories::PostgresSouvenirRepository;
use alumni_service::outbound::repositories::PostgresUserRepository;
use alumni_service::outbound::revocation::InMemoryRevocationList;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alumni_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "alumni-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        frontend_url = %config.app.frontend_url,
        access_ttl_minutes = config.auth.access_ttl_minutes,
        refresh_ttl_days = config.auth.refresh_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let tokens = Arc::new(TokenIssuer::new(
        config.auth.access_secret.as_bytes(),
        config.auth.refresh_secret.as_bytes(),
        config.auth.access_ttl_minutes,
        config.auth.refresh_ttl_days,
    ));
    let revocations = Arc::new(InMemoryRevocationList::new());

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let event_repository = Arc::new(PostgresEventRepository::new(pg_pool.clone()));
    let faq_repository = Arc::new(PostgresFaqRepository::new(pg_pool.clone()));
    let jubilee_repository = Arc::new(PostgresJubileeRepository::new(pg_pool.clone()));
    let souvenir_repository = Arc::new(PostgresSouvenirRepository::new(pg_pool.clone()));
    let representative_repository =
        Arc::new(PostgresRepresentativeRepository::new(pg_pool));

    let sessions = Arc::new(SessionService::new(
        Arc::clone(&user_repository),
        Arc::clone(&revocations),
        Arc::clone(&tokens),
        config.auth.password_hasher()?,
        config.auth.reset_token_ttl_minutes,
    ));
    let users = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        config.auth.password_hasher()?,
    ));
    let events = Arc::new(EventService::new(event_repository));
    let faqs = Arc::new(FaqService::new(faq_repository));
    let jubilee = Arc::new(JubileeService::new(jubilee_repository));
    let souvenirs = Arc::new(SouvenirService::new(souvenir_repository));
    let representatives = Arc::new(RepresentativeService::new(representative_repository));

    let mailer = Arc::new(SmtpMailer::new(
        &config.smtp.host,
        config.smtp.username.clone(),
        config.smtp.password.clone(),
        &config.smtp.sender,
        config.smtp.contact_email.clone(),
    )?);

    let refresh_cookie_max_age = tokens.refresh_ttl().num_seconds();

    let state = AppState {
        sessions,
        users,
        events,
        faqs,
        jubilee,
        souvenirs,
        representatives,
        mailer,
        tokens,
        revocations,
        frontend_url: config.app.frontend_url.clone(),
        cookie_secure: config.app.cookie_secure,
        refresh_cookie_max_age,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
