use thiserror::Error;

/// Failures raised by registration and sign-in. The server layer maps
/// these onto the `{code, message}` wire body.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error("an account with this email already exists")]
    Conflict,
    #[error("account not found")]
    NotFound,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("password hashing failed: {0}")]
    HashError(String),
    #[error("token issuance failed: {0}")]
    TokenError(String),
    #[error("account store error: {0}")]
    Repository(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::HashError(e.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::TokenError(e.to_string())
    }
}
