use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use models::service_type;
use crate::errors::ServiceError;

/// Add a service to a garage's catalogue.
pub async fn create_service_type(db: &DatabaseConnection, input: service_type::NewServiceType) -> Result<service_type::Model, ServiceError> {
    let created = service_type::create(db, input).await?;
    Ok(created)
}

/// Get a service type by id.
pub async fn get_service_type(db: &DatabaseConnection, id: Uuid) -> Result<Option<service_type::Model>, ServiceError> {
    let found = service_type::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List a garage's catalogue.
pub async fn list_service_types_for_garage(db: &DatabaseConnection, garage_id: Uuid) -> Result<Vec<service_type::Model>, ServiceError> {
    let items = service_type::Entity::find()
        .filter(service_type::Column::GarageId.eq(garage_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(items)
}

/// Change a catalogue entry.
pub async fn update_service_type(db: &DatabaseConnection, id: Uuid, input: service_type::NewServiceType) -> Result<service_type::Model, ServiceError> {
    if input.name.trim().is_empty() { return Err(ServiceError::Validation("name required".into())); }
    if input.duration_minutes <= 0 { return Err(ServiceError::Validation("duration must be positive".into())); }
    let mut am: service_type::ActiveModel = service_type::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service type"))?
        .into();
    am.name = Set(input.name);
    am.description = Set(input.description);
    am.duration_minutes = Set(input.duration_minutes);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Remove a catalogue entry. Appointments referencing it keep running with
/// the reference cleared (FK set null).
pub async fn delete_service_type(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    service_type::hard_delete(db, id).await?;
    Ok(())
}
