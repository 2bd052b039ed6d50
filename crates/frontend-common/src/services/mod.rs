pub mod auth;
pub mod support;

pub use auth::AuthApiService;
pub use support::SupportApiService;
