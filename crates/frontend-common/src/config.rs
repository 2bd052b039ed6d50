//! Frontend configuration
//!
//! All values are fixed at build time: Trunk exports the variables to
//! rustc, so `API_BASE=https://api.example trunk build` bakes them into
//! the bundle.

use once_cell::sync::Lazy;

static CONFIG: Lazy<FrontendConfig> = Lazy::new(FrontendConfig::from_build_env);

/// Build-time configuration for the web frontend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the auth/support API.
    pub api_base: String,
    /// Default Streamlit dashboard the redirect hands off to.
    pub dashboard_url: String,
    /// Doctor-role dashboard override. `None` when not configured.
    pub doctor_dashboard_url: Option<String>,
    /// Administrator contact surfaced on the login page.
    pub admin_email: String,
    pub admin_whatsapp: String,
}

impl FrontendConfig {
    /// localStorage key holding the bearer token.
    pub const TOKEN_STORAGE_KEY: &'static str = "access_token";

    /// The process-wide configuration instance.
    pub fn get() -> &'static FrontendConfig {
        &CONFIG
    }

    /// Read configuration from the build environment, falling back to the
    /// local development defaults.
    pub fn from_build_env() -> Self {
        Self::from_env_values(
            option_env!("API_BASE"),
            option_env!("STREAMLIT_URL"),
            option_env!("STREAMLIT_DOCTOR_URL"),
            option_env!("ADMIN_EMAIL"),
            option_env!("ADMIN_WHATSAPP"),
        )
    }

    fn from_env_values(
        api_base: Option<&str>,
        dashboard_url: Option<&str>,
        doctor_dashboard_url: Option<&str>,
        admin_email: Option<&str>,
        admin_whatsapp: Option<&str>,
    ) -> Self {
        Self {
            api_base: non_empty(api_base)
                .unwrap_or("http://localhost:8000")
                .to_string(),
            dashboard_url: non_empty(dashboard_url)
                .unwrap_or("http://localhost:8501")
                .to_string(),
            doctor_dashboard_url: non_empty(doctor_dashboard_url).map(str::to_string),
            admin_email: non_empty(admin_email)
                .unwrap_or("emorie.aguirre@gmail.com")
                .to_string(),
            admin_whatsapp: non_empty(admin_whatsapp)
                .unwrap_or("+505 83797821")
                .to_string(),
        }
    }
}

// An env var set to the empty string counts as unset.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_absent() {
        let cfg = FrontendConfig::from_env_values(None, None, None, None, None);
        assert_eq!(cfg.api_base, "http://localhost:8000");
        assert_eq!(cfg.dashboard_url, "http://localhost:8501");
        assert_eq!(cfg.doctor_dashboard_url, None);
        assert_eq!(cfg.admin_email, "emorie.aguirre@gmail.com");
        assert_eq!(cfg.admin_whatsapp, "+505 83797821");
    }

    #[test]
    fn explicit_values_win() {
        let cfg = FrontendConfig::from_env_values(
            Some("https://api.example"),
            Some("https://dash.example"),
            Some("https://doc.example"),
            Some("admin@example.com"),
            Some("+1 555 0100"),
        );
        assert_eq!(cfg.api_base, "https://api.example");
        assert_eq!(cfg.dashboard_url, "https://dash.example");
        assert_eq!(cfg.doctor_dashboard_url.as_deref(), Some("https://doc.example"));
    }

    #[test]
    fn empty_doctor_override_counts_as_unset() {
        let cfg = FrontendConfig::from_env_values(None, None, Some(""), None, None);
        assert_eq!(cfg.doctor_dashboard_url, None);
    }
}
