//! Refresh-token cookie helpers.
//!
//! The refresh token travels only in an httpOnly, SameSite=Strict cookie
//! scoped to the refresh endpoint path; `secure` is driven by configuration
//! so local development over plain HTTP still works.

use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use time::Duration;

/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// The only path the browser sends the refresh cookie to.
pub const REFRESH_COOKIE_PATH: &str = "/api/auth/refresh-token";

/// Build the refresh-token cookie.
pub fn refresh_cookie(token: &str, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), token.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path(REFRESH_COOKIE_PATH.to_string())
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build an expired cookie that clears the refresh token.
pub fn clear_refresh_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE.to_string(), String::new()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path(REFRESH_COOKIE_PATH.to_string())
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("the-token", 7 * 24 * 60 * 60, true);

        assert_eq!(cookie.name(), REFRESH_COOKIE);
        assert_eq!(cookie.value(), "the-token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some(REFRESH_COOKIE_PATH));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie(false);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
