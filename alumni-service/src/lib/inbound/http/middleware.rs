use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;
use crate::session::ports::RevocationStore;
use crate::user::models::UserId;
use crate::user::models::UserRole;
use crate::user::models::UserStatus;
use crate::user::models::UserType;

/// Extension type carrying the verified identity through the request.
///
/// The raw token is kept so the logout handler can revoke exactly the
/// credential that was presented.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
    pub user_type: UserType,
    pub token: String,
}

/// Allow-list for management routes.
pub const ADMIN_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::SuperAdmin];

/// Bearer-token gate.
///
/// Verifies signature and expiry, rejects revoked tokens and inactive
/// accounts, and attaches [`AuthenticatedUser`] to request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_string();

    let claims = state.tokens.verify_access_token(&token).map_err(|e| {
        tracing::warn!("Access token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    if state.revocations.is_revoked(&token).await {
        return Err(unauthorized("Token has been revoked"));
    }

    if claims.status != UserStatus::Active {
        return Err(unauthorized("User is not active"));
    }

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        role: claims.role,
        user_type: claims.user_type,
        token,
    });

    Ok(next.run(req).await)
}

/// Role allow-list gate, layered inside [`authenticate`].
pub async fn require_role(
    req: Request,
    next: Next,
    allowed: &'static [UserRole],
) -> Result<Response, Response> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| unauthorized("Missing authentication"))?;

    if !allowed.contains(&user.role) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "statusCode": 403,
                "message": "Insufficient permissions"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

/// 401 with the machine-readable re-login hint.
fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "statusCode": 401,
            "message": message,
            "action": "login"
        })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with_header(value: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/api/user");
        if let Some(value) = value {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_success() {
        let req = request_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token_from_header(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_missing_header() {
        let req = request_with_header(None);
        assert!(extract_token_from_header(&req).is_err());
    }

    #[test]
    fn test_extract_token_wrong_scheme() {
        let req = request_with_header(Some("Basic dXNlcjpwdw=="));
        assert!(extract_token_from_header(&req).is_err());
    }
}
