//! Login error types
//!
//! `Display` renders the exact message shown to the user.

use thiserror::Error;

/// Everything that can go wrong while logging in. Transport failures are
/// always mapped into one of these; none propagate to the UI raw.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password missing; checked locally before any request.
    #[error("Completa usuario y contraseña")]
    MissingCredentials,

    /// The server rejected the login and provided a message.
    #[error("{0}")]
    Rejected(String),

    /// The server rejected the login without a parseable error body.
    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    /// Successful response without an `access_token` field.
    #[error("No se recibió token")]
    MissingToken,

    /// The request never reached the server.
    #[error("No se pudo conectar con el servidor")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_surfaces_server_detail_verbatim() {
        let err = AuthError::Rejected("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn fallback_messages_are_generic() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Credenciales incorrectas"
        );
        assert_eq!(AuthError::MissingToken.to_string(), "No se recibió token");
    }
}
