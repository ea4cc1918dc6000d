use async_trait::async_trait;

use super::domain::AuthUser;
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        firstname: &str,
        lastname: &str,
        phone: &str,
    ) -> Result<AuthUser, AuthError>;
    async fn get_password_hash(&self, email: &str) -> Result<Option<String>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, (AuthUser, String)>>, // key: email, value: (user, hash)
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).map(|(u, _)| u.clone()))
        }

        async fn create_user(
            &self,
            email: &str,
            password_hash: &str,
            firstname: &str,
            lastname: &str,
            _phone: &str,
        ) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(AuthError::Conflict);
            }
            let user = AuthUser {
                id: Uuid::new_v4(),
                email: email.to_string(),
                firstname: firstname.to_string(),
                lastname: lastname.to_string(),
                roles: vec!["ROLE_USER".to_string()],
            };
            users.insert(email.to_string(), (user.clone(), password_hash.to_string()));
            Ok(user)
        }

        async fn get_password_hash(&self, email: &str) -> Result<Option<String>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).map(|(_, h)| h.clone()))
        }
    }
}
