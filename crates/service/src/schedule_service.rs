use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use models::schedule;
use crate::errors::ServiceError;

/// Add an opening-hours slot to a garage.
pub async fn create_schedule(db: &DatabaseConnection, input: schedule::NewSchedule) -> Result<schedule::Model, ServiceError> {
    let created = schedule::create(db, input).await?;
    Ok(created)
}

/// Get a schedule slot by id.
pub async fn get_schedule(db: &DatabaseConnection, id: Uuid) -> Result<Option<schedule::Model>, ServiceError> {
    let found = schedule::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List a garage's opening hours.
pub async fn list_schedules_for_garage(db: &DatabaseConnection, garage_id: Uuid) -> Result<Vec<schedule::Model>, ServiceError> {
    let items = schedule::Entity::find()
        .filter(schedule::Column::GarageId.eq(garage_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(items)
}

/// Change a slot's day or hours.
pub async fn update_schedule(db: &DatabaseConnection, id: Uuid, input: schedule::NewSchedule) -> Result<schedule::Model, ServiceError> {
    if !(0..=6).contains(&input.day) { return Err(ServiceError::Validation("day must be 0..=6".into())); }
    if input.end_time <= input.start_time { return Err(ServiceError::Validation("end time must be after start time".into())); }
    let mut am: schedule::ActiveModel = schedule::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("schedule"))?
        .into();
    am.day = Set(input.day);
    am.start_time = Set(input.start_time);
    am.end_time = Set(input.end_time);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Remove a slot.
pub async fn delete_schedule(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    schedule::hard_delete(db, id).await?;
    Ok(())
}
