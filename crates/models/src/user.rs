use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::address;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Json,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub address_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Address => Entity::belongs_to(address::Entity).from(Column::AddressId).to(address::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Role tags as stored (`ROLE_ADMIN`, `ROLE_MANAGER`, ...). `ROLE_USER`
    /// is guaranteed for every authenticated user.
    pub fn role_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .roles
            .as_array()
            .map(|arr| arr.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
            .unwrap_or_default();
        if !tags.iter().any(|t| t == "ROLE_USER") {
            tags.push("ROLE_USER".to_string());
        }
        tags
    }
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    email: &str,
    password_hash: &str,
    firstname: &str,
    lastname: &str,
    phone: &str,
) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    validate_name(firstname)?;
    validate_name(lastname)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        roles: Set(serde_json::json!(["ROLE_USER"])),
        firstname: Set(firstname.to_string()),
        lastname: Set(lastname.to_string()),
        phone: Set(phone.to_string()),
        date_of_birth: Set(None),
        address_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: serde_json::Value) -> Model {
        let now = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            email: "a@b.com".into(),
            password_hash: String::new(),
            roles,
            firstname: "A".into(),
            lastname: "B".into(),
            phone: String::new(),
            date_of_birth: None,
            address_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn role_user_is_implicit() {
        let u = user_with_roles(serde_json::json!([]));
        assert_eq!(u.role_tags(), vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn stored_roles_are_preserved() {
        let u = user_with_roles(serde_json::json!(["ROLE_ADMIN"]));
        let tags = u.role_tags();
        assert!(tags.contains(&"ROLE_ADMIN".to_string()));
        assert!(tags.contains(&"ROLE_USER".to_string()));
    }
}
