use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::{Caller, JwtKeys};

/// Identifies the caller from a bearer token and stores it as a request extension.
/// Requests without a valid token continue as the anonymous caller; the access
/// policy in each handler decides what they may do.
pub async fn identify_caller(
    State(keys): State<JwtKeys>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let caller = match extract_jwt_from_headers(&headers) {
        Ok(token) => match keys.verify(&token) {
            Ok(claims) => Caller::from(claims),
            Err(e) => {
                debug!("Rejected bearer token: {}", e);
                Caller::anonymous()
            }
        },
        Err(_) => Caller::anonymous(),
    };

    request.extensions_mut().insert(caller);
    next.run(request).await
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err("Empty JWT token".to_string()),
        None => Err("Authorization header must use Bearer token format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(extract_jwt_from_headers(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(extract_jwt_from_headers(&headers("Basic dXNlcjpwdw==")).is_err());
        assert!(extract_jwt_from_headers(&headers("Bearer   ")).is_err());
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
    }
}
