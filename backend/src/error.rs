use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use serde::Serialize;
use shared::{ErrorCode, HttpError};
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ApiError {
    #[error("Invalid inputs passed, please check your data.")]
    InvalidInput,
    #[error("Could not find a place for the provided id.")]
    PlaceNotFound,
    #[error("Could not find places for the provided user id.")]
    UserPlacesNotFound,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidInput => ErrorCode::InvalidInput,
            ApiError::PlaceNotFound => ErrorCode::NotFound,
            ApiError::UserPlacesNotFound => ErrorCode::NotFound,
            ApiError::Internal(_) => ErrorCode::SystemError,
        }
    }

    pub fn status(&self) -> Status {
        Status::new(self.code().status())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<ApiError> for HttpError {
    fn from(error: ApiError) -> Self {
        HttpError::from_code(error.code(), error.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = HttpError::from(self);

        rocket::Response::build_from(Json(body).respond_to(req)?)
            .status(status)
            .ok()
    }
}
