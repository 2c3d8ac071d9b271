use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::EnumParseError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::PhoneError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Owns every credential-related field: the password hash, the single stored
/// refresh token, and the password-reset token/expiry pair. None of the
/// credential fields are ever serialized into API responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    pub email: Option<EmailAddress>,
    pub password_hash: String,
    pub role: UserRole,
    pub user_type: UserType,
    pub membership_category: MembershipCategory,
    pub status: UserStatus,
    pub refresh_token: Option<String>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name, used for addressing outbound email.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type.
///
/// Accepts Bangladeshi mobile numbers: an optional `+88` country prefix
/// followed by `01`, an operator digit 3-9, and eight further digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Create a new validated phone number.
    ///
    /// # Errors
    /// * `InvalidFormat` - not a valid Bangladeshi mobile number
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let national = phone.strip_prefix("+88").unwrap_or(&phone);
        let digits_ok = national.len() == 11
            && national.starts_with("01")
            && national.chars().all(|c| c.is_ascii_digit())
            && national.as_bytes()[2] >= b'3';

        if digits_ok {
            Ok(Self(phone))
        } else {
            Err(PhoneError::InvalidFormat(phone))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates the address with an RFC 5322 compliant parser and normalizes it
/// to lowercase, matching how addresses are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, lowercased email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that has passed the account password policy.
///
/// 8-16 characters, at least one lowercase letter, one uppercase letter, one
/// digit and one special character from `@$!%*?&`, no other characters.
/// Exists only in memory between request parsing and hashing; never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 16;
    const SPECIAL: &'static str = "@$!%*?&";

    /// Validate a raw password against the policy.
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - length outside 8-16
    /// * `MissingLowercase` / `MissingUppercase` / `MissingDigit` /
    ///   `MissingSpecial` - a required character class is absent
    /// * `InvalidCharacters` - a character outside the allowed set
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let length = raw.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric() || Self::SPECIAL.contains(c)) {
            return Err(PasswordPolicyError::InvalidCharacters);
        }
        if !raw.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !raw.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !raw.chars().any(|c| Self::SPECIAL.contains(c)) {
            return Err(PasswordPolicyError::MissingSpecial);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep plaintext passwords out of debug output.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Account role controlling administrative access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            "SUPER_ADMIN" => Ok(UserRole::SuperAdmin),
            _ => Err(EnumParseError::unknown("role", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership tier of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    User,
    Moderator,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::User => "USER",
            UserType::Moderator => "MODERATOR",
            UserType::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserType::User),
            "MODERATOR" => Ok(UserType::Moderator),
            "ADMIN" => Ok(UserType::Admin),
            _ => Err(EnumParseError::unknown("user type", s)),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipCategory {
    Free,
    Yearly,
    Permanent,
}

impl MembershipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipCategory::Free => "FREE",
            MembershipCategory::Yearly => "YEARLY",
            MembershipCategory::Permanent => "PERMANENT",
        }
    }
}

impl FromStr for MembershipCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FREE" => Ok(MembershipCategory::Free),
            "YEARLY" => Ok(MembershipCategory::Yearly),
            "PERMANENT" => Ok(MembershipCategory::Permanent),
            _ => Err(EnumParseError::unknown("membership category", s)),
        }
    }
}

impl fmt::Display for MembershipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status gate.
///
/// INACTIVE locks the account out at the next token verification or refresh
/// without deleting the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for UserStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(UserStatus::Active),
            "INACTIVE" => Ok(UserStatus::Inactive),
            _ => Err(EnumParseError::unknown("status", s)),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    pub email: Option<EmailAddress>,
    pub password: Password,
    pub role: Option<UserRole>,
    pub membership_category: Option<MembershipCategory>,
}

/// Command to update an existing user with optional validated fields.
///
/// Only provided fields are updated.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<Phone>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
    pub role: Option<UserRole>,
    pub user_type: Option<UserType>,
    pub membership_category: Option<MembershipCategory>,
    pub status: Option<UserStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_valid_numbers() {
        assert!(Phone::new("01712345678".to_string()).is_ok());
        assert!(Phone::new("+8801912345678".to_string()).is_ok());
    }

    #[test]
    fn test_phone_rejects_invalid_numbers() {
        // too short
        assert!(Phone::new("0171234567".to_string()).is_err());
        // operator digit out of range
        assert!(Phone::new("01212345678".to_string()).is_err());
        // wrong prefix
        assert!(Phone::new("11712345678".to_string()).is_err());
        // non-digit characters
        assert!(Phone::new("01712a45678".to_string()).is_err());
    }

    #[test]
    fn test_email_is_lowercased() {
        let email = EmailAddress::new("Alice@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("Abcd123!@".to_string()).is_ok());

        assert!(matches!(
            Password::new("Ab1!".to_string()),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            Password::new("Abcd123!@Abcd123!@".to_string()),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        assert!(matches!(
            Password::new("abcd123!@".to_string()),
            Err(PasswordPolicyError::MissingUppercase)
        ));
        assert!(matches!(
            Password::new("ABCD123!@".to_string()),
            Err(PasswordPolicyError::MissingLowercase)
        ));
        assert!(matches!(
            Password::new("Abcdefg!@".to_string()),
            Err(PasswordPolicyError::MissingDigit)
        ));
        assert!(matches!(
            Password::new("Abcd1234".to_string()),
            Err(PasswordPolicyError::MissingSpecial)
        ));
        assert!(matches!(
            Password::new("Abcd123!#".to_string()),
            Err(PasswordPolicyError::InvalidCharacters)
        ));
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::User, UserRole::Admin, UserRole::SuperAdmin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("OWNER".parse::<UserRole>().is_err());
    }
}
