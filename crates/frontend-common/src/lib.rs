//! Shared building blocks for the MEDINIC web frontend: build-time
//! configuration, the bearer-token store, the auth/support API services
//! and the dashboard redirect resolution.

pub mod auth;
pub mod config;
pub mod redirect;
pub mod services;

pub use auth::{AuthError, BrowserTokenStore, MemoryTokenStore, TokenStore};
pub use config::FrontendConfig;
pub use redirect::{RedirectOutcome, RedirectTarget};
pub use services::{AuthApiService, SupportApiService};
