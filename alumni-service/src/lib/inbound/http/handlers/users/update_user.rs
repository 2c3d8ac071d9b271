use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::UserData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::PhoneError;
use crate::user::models::EmailAddress;
use crate::user::models::MembershipCategory;
use crate::user::models::Password;
use crate::user::models::Phone;
use crate::user::models::UpdateUserCommand;
use crate::user::models::UserId;
use crate::user::models::UserRole;
use crate::user::models::UserStatus;
use crate::user::models::UserType;
use crate::user::ports::UserServicePort;

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UpdateUserResponseData>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = body.try_into_command()?;

    state
        .users
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateUserResponseData {
                    message: "User updated successfully".to_string(),
                    user: user.into(),
                },
            )
        })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(default)]
    user_type: Option<UserType>,
    #[serde(default)]
    membership_category: Option<MembershipCategory>,
    #[serde(default)]
    status: Option<UserStatus>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateUserRequestError {
    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ParseUpdateUserRequestError> {
        Ok(UpdateUserCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone.map(Phone::new).transpose()?,
            email: self.email.map(EmailAddress::new).transpose()?,
            password: self.password.map(Password::new).transpose()?,
            role: self.role,
            user_type: self.user_type,
            membership_category: self.membership_category,
            status: self.status,
        })
    }
}

impl From<ParseUpdateUserRequestError> for ApiError {
    fn from(err: ParseUpdateUserRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateUserResponseData {
    pub message: String,
    pub user: UserData,
}
