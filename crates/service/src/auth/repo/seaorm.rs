use sea_orm::{DatabaseConnection, EntityTrait, ColumnTrait, QueryFilter};

use crate::auth::domain::AuthUser;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_auth_user(u: models::user::Model) -> AuthUser {
    let roles = u.role_tags();
    AuthUser { id: u.id, email: u.email, firstname: u.firstname, lastname: u.lastname, roles }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find()
            .filter(models::user::Column::Email.eq(email.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(to_auth_user))
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        firstname: &str,
        lastname: &str,
        phone: &str,
    ) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, email, password_hash, firstname, lastname, phone)
            .await
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        Ok(to_auth_user(created))
    }

    async fn get_password_hash(&self, email: &str) -> Result<Option<String>, AuthError> {
        let res = models::user::Entity::find()
            .filter(models::user::Column::Email.eq(email.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| u.password_hash))
    }
}
