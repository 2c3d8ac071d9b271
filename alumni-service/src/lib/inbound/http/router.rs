use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::Request;
use axum::http::Response;
use axum::middleware;
use axum::middleware::Next;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::events::create_event::create_event;
use super::handlers::events::delete_event::delete_event;
use super::handlers::events::get_event::get_event;
use super::handlers::events::list_events::list_events;
use super::handlers::events::register_attendee::register_attendee;
use super::handlers::events::unregister_attendee::unregister_attendee;
use super::handlers::events::update_event::update_event;
use super::handlers::faq_categories::create_category::create_category;
use super::handlers::faq_categories::delete_category::delete_category;
use super::handlers::faq_categories::list_categories::list_categories;
use super::handlers::faq_categories::update_category::update_category;
use super::handlers::faqs::create_faq::create_faq;
use super::handlers::faqs::delete_faq::delete_faq;
use super::handlers::faqs::get_faq::get_faq;
use super::handlers::faqs::home_page_faqs::home_page_faqs;
use super::handlers::faqs::list_faqs::list_faqs;
use super::handlers::faqs::update_faq::update_faq;
use super::handlers::jubilee::by_batch_group::by_batch_group;
use super::handlers::jubilee::delete_participant::delete_participant;
use super::handlers::jubilee::get_participant::get_participant;
use super::handlers::jubilee::import_csv::import_csv;
use super::handlers::jubilee::list_participants::list_participants;
use super::handlers::jubilee::register_participant::register_participant;
use super::handlers::jubilee::update_participant::update_participant;
use super::handlers::representatives::create_representative::create_representative;
use super::handlers::representatives::delete_representative::delete_representative;
use super::handlers::representatives::get_representative::get_representative;
use super::handlers::representatives::list_representatives::list_representatives;
use super::handlers::representatives::update_representative::update_representative;
use super::handlers::session::change_password::change_password;
use super::handlers::session::forgot_password::forgot_password;
use super::handlers::session::login::login;
use super::handlers::session::logout::logout;
use super::handlers::session::refresh_token::refresh_token;
use super::handlers::session::register::register;
use super::handlers::session::reset_password_with_token::reset_password_with_token;
use super::handlers::souvenirs::create_souvenir::create_souvenir;
use super::handlers::souvenirs::delete_souvenir::delete_souvenir;
use super::handlers::souvenirs::get_souvenir::get_souvenir;
use super::handlers::souvenirs::list_souvenirs::list_souvenirs;
use super::handlers::souvenirs::update_souvenir::update_souvenir;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_me::get_me;
use super::handlers::users::get_user::get_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_role;
use super::middleware::ADMIN_ROLES;
use crate::domain::event::service::EventService;
use crate::domain::faq::service::FaqService;
use crate::domain::jubilee::service::JubileeService;
use crate::domain::representative::service::RepresentativeService;
use crate::domain::session::service::SessionService;
use crate::domain::session::tokens::TokenIssuer;
use crate::domain::souvenir::service::SouvenirService;
use crate::domain::user::service::UserService;
use crate::outbound::email::SmtpMailer;
use crate::outbound::repositories::PostgresEventRepository;
use crate::outbound::repositories::PostgresFaqRepository;
use crate::outbound::repositories::PostgresJubileeRepository;
use crate::outbound::repositories::PostgresRepresentativeRepository;
use crate::outbound::repositories::PostgresSouvenirRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::outbound::revocation::InMemoryRevocationList;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionService<PostgresUserRepository, InMemoryRevocationList>>,
    pub users: Arc<UserService<PostgresUserRepository>>,
    pub events: Arc<EventService<PostgresEventRepository>>,
    pub faqs: Arc<FaqService<PostgresFaqRepository>>,
    pub jubilee: Arc<JubileeService<PostgresJubileeRepository>>,
    pub souvenirs: Arc<SouvenirService<PostgresSouvenirRepository>>,
    pub representatives: Arc<RepresentativeService<PostgresRepresentativeRepository>>,
    pub mailer: Arc<SmtpMailer>,
    pub tokens: Arc<TokenIssuer>,
    pub revocations: Arc<InMemoryRevocationList>,
    pub frontend_url: String,
    pub cookie_secure: bool,
    /// Max-age of the refresh cookie in seconds; mirrors the refresh TTL.
    pub refresh_cookie_max_age: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh_token))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route(
            "/api/auth/reset-password-with-token",
            post(reset_password_with_token),
        )
        .route("/api/events", get(list_events))
        .route("/api/events/:event_id", get(get_event))
        .route("/api/faqs", get(list_faqs))
        .route("/api/faqs/home-page", get(home_page_faqs))
        .route("/api/faqs/:faq_id", get(get_faq))
        .route("/api/faq-categories", get(list_categories))
        .route("/api/silver-jubilee", get(list_participants))
        .route("/api/silver-jubilee/by-batch-group", get(by_batch_group))
        .route("/api/silver-jubilee/:participant_id", get(get_participant))
        .route("/api/souvenirs", post(create_souvenir))
        .route("/api/souvenirs", get(list_souvenirs))
        .route("/api/souvenirs/:souvenir_id", get(get_souvenir))
        .route("/api/representatives", post(create_representative))
        .route("/api/representatives", get(list_representatives))
        .route(
            "/api/representatives/:representative_id",
            get(get_representative),
        );

    let protected_routes = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/change-password", post(change_password))
        .route("/api/user", get(get_me))
        .route("/api/user/:user_id", get(get_user))
        .route("/api/user/:user_id", patch(update_user))
        .route("/api/events/:event_id/register", post(register_attendee))
        .route(
            "/api/events/:event_id/unregister",
            post(unregister_attendee),
        )
        .route("/api/silver-jubilee/register", post(register_participant))
        .route("/api/silver-jubilee/upload-csv", post(import_csv))
        .route(
            "/api/silver-jubilee/:participant_id",
            patch(update_participant),
        )
        .route(
            "/api/silver-jubilee/:participant_id",
            delete(delete_participant),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/api/user/all", get(list_users))
        .route("/api/user/:user_id", delete(delete_user))
        .route("/api/events", post(create_event))
        .route("/api/events/:event_id", patch(update_event))
        .route("/api/events/:event_id", delete(delete_event))
        .route("/api/faqs", post(create_faq))
        .route("/api/faqs/:faq_id", patch(update_faq))
        .route("/api/faqs/:faq_id", delete(delete_faq))
        .route("/api/faq-categories", post(create_category))
        .route("/api/faq-categories/:category_id", patch(update_category))
        .route("/api/faq-categories/:category_id", delete(delete_category))
        .route("/api/souvenirs/:souvenir_id", patch(update_souvenir))
        .route("/api/souvenirs/:souvenir_id", delete(delete_souvenir))
        .route(
            "/api/representatives/:representative_id",
            patch(update_representative),
        )
        .route(
            "/api/representatives/:representative_id",
            delete(delete_representative),
        )
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_role(req, next, ADMIN_ROLES)
        }))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
