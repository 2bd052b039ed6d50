//! Support API service

use gloo_net::http::Request;
use serde::Serialize;

use crate::config::FrontendConfig;

/// Body of `POST /support/request-access`.
#[derive(Debug, Serialize)]
pub struct AccessRequest {
    pub username: Option<String>,
    pub user_agent: Option<String>,
}

/// Client for the support endpoints of the MEDINIC API.
#[derive(Clone, Debug)]
pub struct SupportApiService {
    api_base: String,
}

impl SupportApiService {
    pub fn new() -> Self {
        Self::with_api_base(&FrontendConfig::get().api_base)
    }

    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Best-effort notification that someone wants an account. The
    /// response body and any failure are discarded on purpose: the UI
    /// shows the admin contact details either way, so delivery problems
    /// must not surface as errors.
    pub async fn request_access(&self, username: &str) {
        let body = AccessRequest {
            username: (!username.is_empty()).then(|| username.to_string()),
            user_agent: browser_user_agent(),
        };

        let request = match Request::post(&format!("{}/support/request-access", self.api_base))
            .json(&body)
        {
            Ok(request) => request,
            Err(e) => {
                gloo::console::warn!("access request not sent:", e.to_string());
                return;
            }
        };

        if let Err(e) = request.send().await {
            gloo::console::warn!("access request not delivered:", e.to_string());
        }
    }
}

impl Default for SupportApiService {
    fn default() -> Self {
        Self::new()
    }
}

fn browser_user_agent() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().user_agent().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_is_sent_as_null() {
        let body = AccessRequest {
            username: None,
            user_agent: Some("test-agent".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("username").unwrap().is_null());
        assert_eq!(json.get("user_agent").unwrap(), "test-agent");
    }
}
