//! Authentication API service

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;
use crate::config::FrontendConfig;

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. The API also sends `token_type: "bearer"`,
/// which nothing here needs.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Client for the auth endpoints of the MEDINIC API.
#[derive(Clone, Debug)]
pub struct AuthApiService {
    api_base: String,
}

impl AuthApiService {
    pub fn new() -> Self {
        Self::with_api_base(&FrontendConfig::get().api_base)
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Local check run before any request is built. Both fields are
    /// required; nothing is sent when either is missing.
    pub fn validate(username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        Self::validate(username, password)?;

        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&format!("{}/auth/login", self.api_base))
            .json(&body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_body(&body));
        }

        let body = response.text().await.unwrap_or_default();
        extract_token(&body)
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a non-success response body onto `AuthError`: a `detail` field is
/// surfaced verbatim, any other JSON body is surfaced serialized, and an
/// unparseable body becomes the generic invalid-credentials message.
fn map_error_body(body: &str) -> AuthError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("detail").and_then(|d| d.as_str()) {
            Some(detail) => AuthError::Rejected(detail.to_string()),
            None => AuthError::Rejected(value.to_string()),
        },
        Err(_) => AuthError::InvalidCredentials,
    }
}

/// Pull the bearer token out of a success response body. A missing or
/// empty `access_token` is a protocol violation, not a success.
fn extract_token(body: &str) -> Result<String, AuthError> {
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|_| AuthError::MissingToken)?;
    match response.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_fail_validation() {
        assert_eq!(
            AuthApiService::validate("", "secret"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            AuthApiService::validate("ana", ""),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(AuthApiService::validate("ana", "secret"), Ok(()));
    }

    #[test]
    fn detail_field_is_surfaced_verbatim() {
        assert_eq!(
            map_error_body(r#"{"detail":"Invalid credentials"}"#),
            AuthError::Rejected("Invalid credentials".to_string())
        );
    }

    #[test]
    fn detail_free_json_is_surfaced_serialized() {
        assert_eq!(
            map_error_body(r#"{"error":"locked"}"#),
            AuthError::Rejected(r#"{"error":"locked"}"#.to_string())
        );
    }

    #[test]
    fn unparseable_error_body_becomes_generic_message() {
        assert_eq!(map_error_body("<html>502</html>"), AuthError::InvalidCredentials);
        assert_eq!(map_error_body(""), AuthError::InvalidCredentials);
    }

    #[test]
    fn token_is_extracted_from_success_body() {
        assert_eq!(
            extract_token(r#"{"access_token":"abc123","token_type":"bearer"}"#),
            Ok("abc123".to_string())
        );
    }

    #[test]
    fn success_without_token_is_a_protocol_error() {
        assert_eq!(extract_token(r#"{"token_type":"bearer"}"#), Err(AuthError::MissingToken));
        assert_eq!(extract_token(r#"{"access_token":""}"#), Err(AuthError::MissingToken));
        assert_eq!(extract_token("not json"), Err(AuthError::MissingToken));
    }

    #[test]
    fn api_base_trailing_slash_is_normalized() {
        let service = AuthApiService::with_api_base("http://localhost:8000/");
        assert_eq!(service.api_base, "http://localhost:8000");
    }
}
