use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub number: String,
    pub street_type: String,
    pub name: String,
    pub town: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// New address payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAddress {
    pub number: String,
    pub street_type: String,
    pub name: String,
    pub town: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub async fn create(db: &DatabaseConnection, input: NewAddress) -> Result<Model, errors::ModelError> {
    if input.name.trim().is_empty() { return Err(errors::ModelError::Validation("street name required".into())); }
    if input.town.trim().is_empty() { return Err(errors::ModelError::Validation("town required".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        number: Set(input.number),
        street_type: Set(input.street_type),
        name: Set(input.name),
        town: Set(input.town),
        postal_code: Set(input.postal_code),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
