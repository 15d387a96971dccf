//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            match e {
                JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.to_string()),
                JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.to_string()),
                JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.to_string()),
                JsonRejection::BytesRejection(e) => ApiError::invalid_body(e.to_string()),
                _ => ApiError::invalid_body("Invalid JSON body"),
            }
        })?;

        // Validate
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use coupon_service::ClaimCouponRequest;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid_body() {
        let req = json_request("{\"claimer_token\": ");

        let result = ValidatedJson::<ClaimCouponRequest>::from_request(req, &()).await;

        let err = result.expect_err("truncated JSON must be rejected");
        assert_eq!(err.error_code(), "INVALID_REQUEST_BODY");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_body() {
        let req = Request::builder()
            .method("POST")
            .body(Body::from("{\"claimer_token\": \"abcdefgh\"}"))
            .unwrap();

        let result = ValidatedJson::<ClaimCouponRequest>::from_request(req, &()).await;

        let err = result.expect_err("missing content type must be rejected");
        assert_eq!(err.error_code(), "INVALID_REQUEST_BODY");
    }

    #[tokio::test]
    async fn test_invalid_field_is_validation_error() {
        // Well-formed JSON, token below the minimum length
        let req = json_request("{\"claimer_token\": \"short\"}");

        let result = ValidatedJson::<ClaimCouponRequest>::from_request(req, &()).await;

        let err = result.expect_err("short token must fail validation");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let req = json_request("{\"claimer_token\": \"abcdefgh\"}");

        let ValidatedJson(body) = ValidatedJson::<ClaimCouponRequest>::from_request(req, &())
            .await
            .expect("valid body must extract");

        assert_eq!(body.claimer_token, "abcdefgh");
    }
}
