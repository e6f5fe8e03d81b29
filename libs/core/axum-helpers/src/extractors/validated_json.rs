//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body and validates it via the `validator`
/// crate's `Validate` trait. Failures produce a 400 envelope response with
/// the offending fields named.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateCoupon {
///     #[validate(length(min = 1))]
///     code: String,
/// }
///
/// async fn create_coupon(ValidatedJson(payload): ValidatedJson<CreateCoupon>) {
///     // payload is deserialized and validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        data.validate().map_err(|e| {
            let field_errors = e.field_errors();
            let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
            fields.sort_unstable();
            AppError::BadRequest(format!("Validation failed for: {}", fields.join(", ")))
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
