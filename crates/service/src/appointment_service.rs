use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use models::appointment;
use crate::errors::ServiceError;

/// Book an appointment.
pub async fn create_appointment(db: &DatabaseConnection, input: appointment::NewAppointment) -> Result<appointment::Model, ServiceError> {
    let created = appointment::create(db, input).await?;
    Ok(created)
}

/// Get an appointment by id.
pub async fn get_appointment(db: &DatabaseConnection, id: Uuid) -> Result<Option<appointment::Model>, ServiceError> {
    let found = appointment::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List a user's appointments.
pub async fn list_appointments_of(db: &DatabaseConnection, user_id: Uuid) -> Result<Vec<appointment::Model>, ServiceError> {
    let items = appointment::Entity::find()
        .filter(appointment::Column::UserId.eq(user_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(items)
}

/// List a garage's appointments.
pub async fn list_appointments_for_garage(db: &DatabaseConnection, garage_id: Uuid) -> Result<Vec<appointment::Model>, ServiceError> {
    let items = appointment::Entity::find()
        .filter(appointment::Column::GarageId.eq(garage_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(items)
}

/// Reschedule or retitle an appointment. Owner references do not change.
pub async fn update_appointment(db: &DatabaseConnection, id: Uuid, input: appointment::NewAppointment) -> Result<appointment::Model, ServiceError> {
    if input.title.trim().is_empty() { return Err(ServiceError::Validation("title required".into())); }
    if input.end_date < input.start_date { return Err(ServiceError::Validation("end date before start date".into())); }
    let mut am: appointment::ActiveModel = appointment::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("appointment"))?
        .into();
    am.title = Set(input.title);
    am.details = Set(input.details);
    am.start_date = Set(input.start_date);
    am.end_date = Set(input.end_date);
    am.type_id = Set(input.type_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Cancel an appointment.
pub async fn delete_appointment(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    appointment::hard_delete(db, id).await?;
    Ok(())
}
