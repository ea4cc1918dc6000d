use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use jsonwebtoken::{encode, Header as JwtHeader, EncodingKey};
use rand::rngs::OsRng;
use tracing::{info, debug, instrument};

use super::domain::{RegisterInput, LoginInput, AuthUser, AuthSession};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
}

/// JWT claims carried in session tokens.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: String,
    pub exp: usize,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: None });
    /// let input = RegisterInput { email: "user@example.com".into(), password: "Secret123".into(), firstname: "Test".into(), lastname: "User".into(), phone: String::new() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        if input.password.len() < 8 {
            return Err(AuthError::Validation("password too short (>=8)".into()));
        }
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let user = self.repo
            .create_user(&input.email, &hash, &input.firstname, &input.lastname, &input.phone)
            .await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user)
    }

    /// Authenticate a user and optionally issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: Some("secret".into()) });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "u@e.com".into(), password: "Passw0rd".into(), firstname: "N".into(), lastname: "M".into(), phone: String::new() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// assert!(session.token.is_some());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self.repo
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let stored = self.repo
            .get_password_hash(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&stored)?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let mut token = None;
        if let Some(secret) = &self.cfg.jwt_secret {
            let exp = (chrono::Utc::now() + chrono::Duration::hours(12)).timestamp() as usize;
            let claims = Claims { sub: user.email.clone(), uid: user.id.to_string(), exp };
            token = Some(encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))?);
        }

        Ok(AuthSession { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc(secret: Option<&str>) -> AuthService<MockAuthRepository> {
        AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: secret.map(str::to_string) },
        )
    }

    fn registration(email: &str) -> RegisterInput {
        RegisterInput {
            email: email.into(),
            password: "Passw0rd!".into(),
            firstname: "Jane".into(),
            lastname: "Doe".into(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let svc = svc(None);
        let mut input = registration("short@example.com");
        input.password = "abc".into();
        assert!(matches!(svc.register(input).await, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let svc = svc(None);
        svc.register(registration("dup@example.com")).await.unwrap();
        assert!(matches!(
            svc.register(registration("dup@example.com")).await,
            Err(AuthError::Conflict)
        ));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let svc = svc(Some("secret"));
        svc.register(registration("who@example.com")).await.unwrap();
        let result = svc
            .login(LoginInput { email: "who@example.com".into(), password: "nope-nope".into() })
            .await;
        assert!(matches!(result, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn login_issues_token_when_secret_configured() {
        let svc = svc(Some("secret"));
        svc.register(registration("tok@example.com")).await.unwrap();
        let session = svc
            .login(LoginInput { email: "tok@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap();
        assert!(session.token.is_some());
        assert!(session.user.roles.contains(&"ROLE_USER".to_string()));
    }
}
