//! Dashboard redirect resolution
//!
//! Turns an authenticated session into a hand-off URL for the external
//! Streamlit dashboard. Everything here is pure; the `/redirect` page
//! feeds in `window.location` and the browser token store.

use url::form_urlencoded;
use url::Url;

use crate::auth::TokenStore;
use crate::config::FrontendConfig;

/// Port convention for the derived doctor dashboard: the default
/// Streamlit instance on 8501 has a doctor-profile sibling on 8502.
const DASHBOARD_PORT: u16 = 8501;
const DOCTOR_DASHBOARD_PORT: u16 = 8502;

/// Role hint carried in the `target` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RedirectTarget {
    #[default]
    Default,
    Doctor,
}

impl RedirectTarget {
    /// Parse the `target` query parameter. Unknown or absent values fall
    /// back to the default dashboard.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("doctor") => Self::Doctor,
            _ => Self::Default,
        }
    }
}

/// Terminal outcome of entering the `/redirect` route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Navigate away to the external dashboard.
    Dashboard(String),
    /// No resolvable token (or unusable destination): back to the login
    /// entry point. Not an error the user sees.
    Login,
}

/// `token` and `target` parameters of the redirect route, percent-decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectQuery {
    pub token: Option<String>,
    pub target: Option<String>,
}

/// Parse a `window.location.search` string (with or without the leading
/// `?`). Empty values count as absent.
pub fn parse_redirect_query(search: &str) -> RedirectQuery {
    let mut query = RedirectQuery::default();
    let raw = search.strip_prefix('?').unwrap_or(search);
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "token" => query.token = Some(value.into_owned()),
            "target" => query.target = Some(value.into_owned()),
            _ => {}
        }
    }
    query
}

/// Select the destination base URL for a role.
pub fn resolve_destination(cfg: &FrontendConfig, target: RedirectTarget) -> String {
    match target {
        RedirectTarget::Doctor => cfg
            .doctor_dashboard_url
            .clone()
            .unwrap_or_else(|| derive_doctor_url(&cfg.dashboard_url)),
        RedirectTarget::Default => cfg.dashboard_url.clone(),
    }
}

// No explicit doctor dashboard configured: derive one from the default by
// the 8501 -> 8502 port convention. Anything not on 8501 is left alone.
fn derive_doctor_url(dashboard_url: &str) -> String {
    match Url::parse(dashboard_url) {
        Ok(mut url) if url.port() == Some(DASHBOARD_PORT) => {
            if url.set_port(Some(DOCTOR_DASHBOARD_PORT)).is_ok() {
                url.to_string()
            } else {
                dashboard_url.to_string()
            }
        }
        _ => dashboard_url.to_string(),
    }
}

/// Append the bearer token to the destination. The receiving dashboards
/// disagree on the parameter name, so the token is sent under all three
/// aliases. Returns `None` when the destination is not a valid URL.
pub fn handoff_url(destination: &str, token: &str) -> Option<String> {
    let mut url = Url::parse(destination).ok()?;
    url.query_pairs_mut()
        .append_pair("token", token)
        .append_pair("access_token", token)
        .append_pair("jwt", token);
    Some(url.to_string())
}

/// Resolve the redirect route in one step: pick the token (URL parameter
/// wins, stored token is the fallback), select the destination for the
/// role hint and build the hand-off URL. No token means `Login`.
pub fn resolve_redirect(
    query: &RedirectQuery,
    store: &dyn TokenStore,
    cfg: &FrontendConfig,
) -> RedirectOutcome {
    let token = match query.token.clone().or_else(|| store.get()) {
        Some(token) if !token.is_empty() => token,
        _ => return RedirectOutcome::Login,
    };

    let target = RedirectTarget::from_query(query.target.as_deref());
    let destination = resolve_destination(cfg, target);
    match handoff_url(&destination, &token) {
        Some(url) => RedirectOutcome::Dashboard(url),
        None => RedirectOutcome::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;

    fn config(doctor_override: Option<&str>) -> FrontendConfig {
        FrontendConfig {
            api_base: "http://localhost:8000".to_string(),
            dashboard_url: "http://localhost:8501".to_string(),
            doctor_dashboard_url: doctor_override.map(str::to_string),
            admin_email: "admin@example.com".to_string(),
            admin_whatsapp: "+1 555 0100".to_string(),
        }
    }

    #[test]
    fn target_parses_doctor_and_falls_back() {
        assert_eq!(
            RedirectTarget::from_query(Some("doctor")),
            RedirectTarget::Doctor
        );
        assert_eq!(
            RedirectTarget::from_query(Some("nurse")),
            RedirectTarget::Default
        );
        assert_eq!(RedirectTarget::from_query(None), RedirectTarget::Default);
    }

    #[test]
    fn query_parsing_decodes_and_skips_empty() {
        let q = parse_redirect_query("?target=doctor&token=abc%20123");
        assert_eq!(q.target.as_deref(), Some("doctor"));
        assert_eq!(q.token.as_deref(), Some("abc 123"));

        let q = parse_redirect_query("token=&target=doctor");
        assert_eq!(q.token, None);
        assert_eq!(q.target.as_deref(), Some("doctor"));
    }

    #[test]
    fn doctor_override_wins_over_derivation() {
        let cfg = config(Some("https://doc.example"));
        assert_eq!(
            resolve_destination(&cfg, RedirectTarget::Doctor),
            "https://doc.example"
        );
    }

    #[test]
    fn doctor_without_override_uses_port_convention() {
        let cfg = config(None);
        assert_eq!(
            resolve_destination(&cfg, RedirectTarget::Doctor),
            "http://localhost:8502/"
        );
    }

    #[test]
    fn derivation_leaves_other_ports_alone() {
        assert_eq!(
            derive_doctor_url("https://dash.example"),
            "https://dash.example"
        );
        assert_eq!(
            derive_doctor_url("http://localhost:9000"),
            "http://localhost:9000"
        );
    }

    #[test]
    fn default_target_uses_default_dashboard() {
        let cfg = config(Some("https://doc.example"));
        assert_eq!(
            resolve_destination(&cfg, RedirectTarget::Default),
            "http://localhost:8501"
        );
    }

    #[test]
    fn handoff_appends_all_three_token_aliases() {
        assert_eq!(
            handoff_url("https://doc.example", "abc123").as_deref(),
            Some("https://doc.example/?token=abc123&access_token=abc123&jwt=abc123")
        );
    }

    #[test]
    fn handoff_rejects_unparseable_destinations() {
        assert_eq!(handoff_url("not a url", "abc123"), None);
    }

    #[test]
    fn url_token_wins_over_stored_token() {
        let store = MemoryTokenStore::with_token("stored");
        let query = parse_redirect_query("?token=fromurl&target=doctor");
        let outcome = resolve_redirect(&query, &store, &config(Some("https://doc.example")));
        assert_eq!(
            outcome,
            RedirectOutcome::Dashboard(
                "https://doc.example/?token=fromurl&access_token=fromurl&jwt=fromurl".to_string()
            )
        );
    }

    #[test]
    fn stored_token_is_the_fallback() {
        let store = MemoryTokenStore::with_token("stored");
        let outcome = resolve_redirect(&parse_redirect_query(""), &store, &config(None));
        assert_eq!(
            outcome,
            RedirectOutcome::Dashboard(
                "http://localhost:8501/?token=stored&access_token=stored&jwt=stored".to_string()
            )
        );
    }

    #[test]
    fn no_token_anywhere_falls_back_to_login_idempotently() {
        let store = MemoryTokenStore::new();
        let query = parse_redirect_query("?target=doctor");
        let cfg = config(None);
        assert_eq!(resolve_redirect(&query, &store, &cfg), RedirectOutcome::Login);
        // Repeated resolution yields the same terminal outcome.
        assert_eq!(resolve_redirect(&query, &store, &cfg), RedirectOutcome::Login);
    }

    #[test]
    fn doctor_port_convention_end_to_end() {
        let store = MemoryTokenStore::new();
        let query = parse_redirect_query("?token=abc123&target=doctor");
        let outcome = resolve_redirect(&query, &store, &config(None));
        assert_eq!(
            outcome,
            RedirectOutcome::Dashboard(
                "http://localhost:8502/?token=abc123&access_token=abc123&jwt=abc123".to_string()
            )
        );
    }
}
