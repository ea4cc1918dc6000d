use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::user;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub number_plate: String,
    pub release_date: Option<Date>,
    pub mileage: i32,
    pub user_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// New vehicle payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehicle {
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub number_plate: String,
    pub release_date: Option<Date>,
    pub mileage: i32,
}

pub async fn create(db: &DatabaseConnection, input: NewVehicle, user_id: Option<Uuid>) -> Result<Model, errors::ModelError> {
    if input.number_plate.trim().is_empty() { return Err(errors::ModelError::Validation("number plate required".into())); }
    if input.mileage < 0 { return Err(errors::ModelError::Validation("mileage must be >= 0".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        vehicle_type: Set(input.vehicle_type),
        brand: Set(input.brand),
        model: Set(input.model),
        number_plate: Set(input.number_plate),
        release_date: Set(input.release_date),
        mileage: Set(input.mileage),
        user_id: Set(user_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
