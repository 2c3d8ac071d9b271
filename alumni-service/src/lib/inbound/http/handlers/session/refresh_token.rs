use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

/// Cookie-only rotation: no request body, no auth header. The invalid-token
/// arm clears the cookie so the client stops replaying a dead credential.
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, ApiSuccess<RefreshTokenResponseData>), (CookieJar, ApiError)> {
    let Some(presented) = jar.get(cookies::REFRESH_COOKIE).map(|c| c.value().to_string())
    else {
        return Err((
            jar,
            ApiError::Unauthorized("No refresh token provided".to_string()),
        ));
    };

    match state.sessions.refresh(&presented).await {
        Ok(tokens) => {
            let jar = jar.add(cookies::refresh_cookie(
                &tokens.refresh_token,
                state.refresh_cookie_max_age,
                state.cookie_secure,
            ));
            Ok((
                jar,
                ApiSuccess::new(
                    StatusCode::OK,
                    RefreshTokenResponseData {
                        access_token: tokens.access_token,
                        message: "Token refreshed successfully".to_string(),
                    },
                ),
            ))
        }
        Err(e) => {
            let jar = jar.add(cookies::clear_refresh_cookie(state.cookie_secure));
            Err((jar, ApiError::from(e)))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponseData {
    pub access_token: String,
    pub message: String,
}
