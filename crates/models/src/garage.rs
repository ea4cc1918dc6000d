use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{address, user};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub register_number: String,
    pub phone: String,
    pub email: String,
    pub rating: Option<f64>,
    pub address_id: Uuid,
    /// Designated owner with edit/delete rights, set at creation.
    pub primary_owner_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Address,
    PrimaryOwner,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Address => Entity::belongs_to(address::Entity).from(Column::AddressId).to(address::Column::Id).into(),
            Relation::PrimaryOwner => Entity::belongs_to(user::Entity).from(Column::PrimaryOwnerId).to(user::Column::Id).into(),
        }
    }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// New garage payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGarage {
    pub name: String,
    pub register_number: String,
    pub phone: String,
    pub email: String,
}

pub async fn create(
    db: &DatabaseConnection,
    input: NewGarage,
    address_id: Uuid,
    primary_owner_id: Option<Uuid>,
) -> Result<Model, errors::ModelError> {
    if input.name.trim().is_empty() { return Err(errors::ModelError::Validation("garage name required".into())); }
    if !input.email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        register_number: Set(input.register_number),
        phone: Set(input.phone),
        email: Set(input.email),
        rating: Set(None),
        address_id: Set(address_id),
        primary_owner_id: Set(primary_owner_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
