use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::garage;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub garage_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Garage,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Garage => Entity::belongs_to(garage::Entity).from(Column::GarageId).to(garage::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// New service type payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewServiceType {
    pub name: String,
    pub description: String,
    pub duration_minutes: i32,
    pub garage_id: Option<Uuid>,
}

pub async fn create(db: &DatabaseConnection, input: NewServiceType) -> Result<Model, errors::ModelError> {
    if input.name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if input.duration_minutes <= 0 { return Err(errors::ModelError::Validation("duration must be positive".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        duration_minutes: Set(input.duration_minutes),
        garage_id: Set(input.garage_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
