use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::SessionResponseData;
use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<SessionResponseData>), ApiError> {
    let (user, tokens) = state.sessions.login(&body.identifier, &body.password).await?;

    let jar = jar.add(cookies::refresh_cookie(
        &tokens.refresh_token,
        state.refresh_cookie_max_age,
        state.cookie_secure,
    ));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            SessionResponseData {
                user: (&user).into(),
                access_token: tokens.access_token,
            },
        ),
    ))
}

/// `identifier` is an email address or a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    identifier: String,
    password: String,
}
