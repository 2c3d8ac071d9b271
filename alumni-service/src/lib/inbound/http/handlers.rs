use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::event::errors::EventError;
use crate::faq::errors::FaqError;
use crate::jubilee::errors::JubileeError;
use crate::representative::errors::RepresentativeError;
use crate::session::errors::SessionError;
use crate::souvenir::errors::SouvenirError;
use crate::user::errors::UserError;

pub mod events;
pub mod faq_categories;
pub mod faqs;
pub mod jubilee;
pub mod representatives;
pub mod session;
pub mod souvenirs;
pub mod users;

/// Successful response: status code plus a plain JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Simple `{"message": ...}` body used by mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failed response, rendered as `{"statusCode": ..., "message": ...}`.
///
/// 401 for anything credential or token related, 400 for validation and
/// duplicate conflicts, 422 for malformed value objects in request bodies,
/// 500 as the catch-all (original error logged server-side, generic message
/// returned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    status_code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (
            status,
            Json(ApiErrorBody {
                status_code: status.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::PhoneAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest("Phone or email already exists".to_string())
            }
            UserError::InvalidUserId(_)
            | UserError::InvalidPhone(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::InvalidField(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::DuplicateAccount => ApiError::BadRequest(err.to_string()),
            SessionError::InvalidCredentials
            | SessionError::InvalidRefreshToken
            | SessionError::InvalidOrExpiredResetToken => ApiError::Unauthorized(err.to_string()),
            // The forgot-password handler swallows these; no other call
            // site produces them.
            SessionError::AccountNotFound | SessionError::NoEmailOnAccount => {
                ApiError::NotFound(err.to_string())
            }
            SessionError::PasswordPolicy(_) => ApiError::UnprocessableEntity(err.to_string()),
            SessionError::TokenSigning(_) | SessionError::PasswordHashing(_) => {
                ApiError::InternalServerError(err.to_string())
            }
            SessionError::User(inner) => ApiError::from(inner),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EventError::PricingRequired
            | EventError::AlreadyRegistered
            | EventError::NotRegistered
            | EventError::FullyBooked => ApiError::BadRequest(err.to_string()),
            EventError::InvalidEventId(_) => ApiError::UnprocessableEntity(err.to_string()),
            EventError::InvalidField(_) | EventError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<FaqError> for ApiError {
    fn from(err: FaqError) -> Self {
        match err {
            FaqError::NotFound(_) | FaqError::CategoryNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            FaqError::DuplicateCategoryName(_) => ApiError::Conflict(err.to_string()),
            FaqError::OrderTaken(_)
            | FaqError::HomePageLimitReached(_)
            | FaqError::CategoryInUse => ApiError::BadRequest(err.to_string()),
            FaqError::InvalidId(_) => ApiError::UnprocessableEntity(err.to_string()),
            FaqError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JubileeError> for ApiError {
    fn from(err: JubileeError) -> Self {
        match err {
            JubileeError::NotFound(_) | JubileeError::NoParticipantsInBatchGroup { .. } => {
                ApiError::NotFound(err.to_string())
            }
            JubileeError::Duplicate
            | JubileeError::MissingField(_)
            | JubileeError::MainParticipantNotFound(_)
            | JubileeError::InvalidField(_) => ApiError::BadRequest(err.to_string()),
            JubileeError::InvalidParticipantId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            JubileeError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SouvenirError> for ApiError {
    fn from(err: SouvenirError) -> Self {
        match err {
            SouvenirError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SouvenirError::MissingGalleryPhotos
            | SouvenirError::TooManyGalleryPhotos(_)
            | SouvenirError::SinglePhotoOnGallery
            | SouvenirError::MissingPhoto
            | SouvenirError::MissingContent
            | SouvenirError::GalleryPhotosOnSingle => ApiError::BadRequest(err.to_string()),
            SouvenirError::InvalidSouvenirId(_) => ApiError::UnprocessableEntity(err.to_string()),
            SouvenirError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<RepresentativeError> for ApiError {
    fn from(err: RepresentativeError) -> Self {
        match err {
            RepresentativeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RepresentativeError::PhoneAlreadyExists => ApiError::BadRequest(err.to_string()),
            RepresentativeError::InvalidRepresentativeId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            RepresentativeError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
