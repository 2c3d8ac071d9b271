use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::user::models::MembershipCategory;
use crate::user::models::User;
use crate::user::models::UserRole;
use crate::user::models::UserStatus;
use crate::user::models::UserType;

pub mod delete_user;
pub mod get_me;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// Public view of a user. Credential fields (password hash, refresh token,
/// reset token) never leave the domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub user_type: UserType,
    pub membership_category: MembershipCategory,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.as_str().to_string(),
            email: user.email.as_ref().map(|e| e.as_str().to_string()),
            role: user.role,
            user_type: user.user_type,
            membership_category: user.membership_category,
            status: user.status,
            created_at: user.created_at,
        }
    }
}
