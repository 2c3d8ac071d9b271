use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::CookieJar;

use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<MessageResponse>), ApiError> {
    state.sessions.logout(&user.user_id, &user.token).await?;

    let jar = jar.add(cookies::clear_refresh_cookie(state.cookie_secure));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            MessageResponse::new("Logged out successfully"),
        ),
    ))
}
