use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CouponError {
    #[error("Coupon not found: {0}")]
    NotFound(Uuid),

    #[error("Coupon with code '{0}' already exists")]
    DuplicateCode(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CouponResult<T> = Result<T, CouponError>;

impl From<CouponError> for AppError {
    fn from(err: CouponError) -> Self {
        match err {
            CouponError::NotFound(_) => AppError::NotFound("Coupon not found".to_string()),
            CouponError::DuplicateCode(code) => {
                AppError::Conflict(format!("Coupon with code '{}' already exists", code))
            }
            CouponError::Validation(msg) => AppError::BadRequest(msg),
            CouponError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CouponError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CouponError {
    fn from(err: mongodb::error::Error) -> Self {
        CouponError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_duplicate_code_maps_to_409() {
        let response = CouponError::DuplicateCode("SAVE10".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CouponError::NotFound(Uuid::now_v7()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
