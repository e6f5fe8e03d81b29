use super::jwt::{AdminRole, JwtAuth};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extract JWT from Authorization header or cookie
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    // Try Authorization header first: "Bearer <token>"
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
        .or_else(|| {
            // Fallback to cookie: "access_token=<token>"
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        cookie
                            .trim()
                            .strip_prefix("access_token=")
                            .map(|t| t.to_string())
                    })
                })
        })
}

fn authenticate(auth: &JwtAuth, headers: &HeaderMap) -> Result<super::jwt::JwtClaims, Response> {
    let token = extract_token_from_request(headers).ok_or_else(|| {
        tracing::debug!("No JWT found in Authorization header or cookie");
        AppError::Unauthorized("No token provided".to_string()).into_response()
    })?;

    auth.verify_token(&token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Unauthorized("Invalid token".to_string()).into_response()
    })
}

/// Admin authentication middleware.
///
/// Validates the JWT from the Authorization header or cookie and inserts
/// the claims into request extensions. Any admin role passes.
///
/// # Example
///
/// ```ignore
/// let routes = Router::new()
///     .route("/fetch-all", get(fetch_all))
///     .layer(axum::middleware::from_fn_with_state(auth.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(&auth, &headers)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Super-admin authentication middleware.
///
/// Like [`require_admin`] but additionally requires the `super_admin` role.
pub async fn require_super_admin(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let claims = authenticate(&auth, &headers)?;

    if claims.role != AdminRole::SuperAdmin {
        tracing::debug!(user = %claims.sub, "Super admin access denied");
        return Err(
            AppError::Forbidden("Super admin privileges required".to_string()).into_response(),
        );
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_token_from_request(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_extract_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("theme=dark; access_token=abc.def"),
        );
        assert_eq!(extract_token_from_request(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_extract_token_missing() {
        assert!(extract_token_from_request(&HeaderMap::new()).is_none());
    }
}
