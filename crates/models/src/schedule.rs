use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::garage;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Weekday, 0 = Monday .. 6 = Sunday.
    pub day: i16,
    pub start_time: Time,
    pub end_time: Time,
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

/// New schedule payload, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub day: i16,
    pub start_time: Time,
    pub end_time: Time,
    pub garage_id: Option<Uuid>,
}

pub async fn create(db: &DatabaseConnection, input: NewSchedule) -> Result<Model, errors::ModelError> {
    if !(0..=6).contains(&input.day) { return Err(errors::ModelError::Validation("day must be 0..=6".into())); }
    if input.end_time <= input.start_time { return Err(errors::ModelError::Validation("end time must be after start time".into())); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        day: Set(input.day),
        start_time: Set(input.start_time),
        end_time: Set(input.end_time),
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
