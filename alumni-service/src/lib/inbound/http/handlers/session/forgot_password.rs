use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::notification::Mailer;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponse;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;

/// Always the same body, whatever happened. Distinguishing "no such
/// account", "no email on account" and "delivery failed" would leak which
/// identifiers are registered.
pub const GENERIC_RESET_MESSAGE: &str =
    "If an account with that identifier exists, you will receive a password reset email";

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordRequest>,
) -> ApiSuccess<MessageResponse> {
    match state.sessions.forgot_password(&body.identifier).await {
        Ok((user, reset_token)) => {
            let reset_link = format!(
                "{}/reset-password?token={}",
                state.frontend_url.trim_end_matches('/'),
                reset_token
            );

            // The service guarantees an email is present on success.
            if let Some(email) = &user.email {
                if let Err(e) = state
                    .mailer
                    .send_password_reset(email, &user.full_name(), &reset_link)
                    .await
                {
                    tracing::error!(error = %e, "Failed to send password reset email");
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Password reset request not fulfilled");
        }
    }

    ApiSuccess::new(StatusCode::OK, MessageResponse::new(GENERIC_RESET_MESSAGE))
}

/// `identifier` is an email address or a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordRequest {
    identifier: String,
}
