use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use thiserror::Error;

use super::SessionResponseData;
use crate::inbound::http::cookies;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::session::ports::SessionServicePort;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::PhoneError;
use crate::user::models::EmailAddress;
use crate::user::models::MembershipCategory;
use crate::user::models::Password;
use crate::user::models::Phone;
use crate::user::models::RegisterUserCommand;
use crate::user::models::UserRole;

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterRequest>,
) -> Result<(CookieJar, ApiSuccess<SessionResponseData>), ApiError> {
    let command = body.try_into_command()?;

    let (user, tokens) = state.sessions.register(command).await?;

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

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    phone_number: String,
    first_name: String,
    last_name: String,
    password: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(default)]
    membership_category: Option<MembershipCategory>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let phone = Phone::new(self.phone_number)?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let password = Password::new(self.password)?;

        Ok(RegisterUserCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            phone,
            email,
            password,
            role: self.role,
            membership_category: self.membership_category,
        })
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
