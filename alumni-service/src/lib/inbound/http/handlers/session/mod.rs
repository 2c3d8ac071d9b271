use serde::Serialize;

use crate::inbound::http::handlers::users::UserData;

pub mod change_password;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;
pub mod reset_password_with_token;

/// Body shared by register and login: the public user view plus the access
/// token. The refresh token never appears in a body; it travels in the
/// httpOnly cookie.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseData {
    pub user: UserData,
    pub access_token: String,
}
