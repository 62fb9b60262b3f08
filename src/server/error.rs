use crate::{error::ApiError, models::ErrorEnvelope};
use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};

impl ApiError {
    fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::Validation(message) => ErrorEnvelope::new(message.clone()),
            ApiError::InvalidBody(detail) => {
                ErrorEnvelope::new("Invalid request body").with_message(detail.clone())
            }
            ApiError::MethodNotAllowed => ErrorEnvelope::new("Method not allowed"),
            ApiError::Internal(detail) => {
                ErrorEnvelope::new("Failed to generate post").with_message(detail.clone())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let ApiError::MethodNotAllowed = self {
            response.insert_header((header::ALLOW, "POST, OPTIONS"));
        }
        response.json(self.envelope())
    }
}
