use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use models::vehicle;
use crate::errors::ServiceError;

/// Create a vehicle owned by a user.
pub async fn create_vehicle(db: &DatabaseConnection, input: vehicle::NewVehicle, owner_id: Uuid) -> Result<vehicle::Model, ServiceError> {
    let created = vehicle::create(db, input, Some(owner_id)).await?;
    Ok(created)
}

/// Get a vehicle by id.
pub async fn get_vehicle(db: &DatabaseConnection, id: Uuid) -> Result<Option<vehicle::Model>, ServiceError> {
    let found = vehicle::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List vehicles owned by a user.
pub async fn list_vehicles_of(db: &DatabaseConnection, owner_id: Uuid) -> Result<Vec<vehicle::Model>, ServiceError> {
    let vehicles = vehicle::Entity::find()
        .filter(vehicle::Column::UserId.eq(owner_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(vehicles)
}

/// Replace a vehicle's fields.
pub async fn update_vehicle(db: &DatabaseConnection, id: Uuid, input: vehicle::NewVehicle) -> Result<vehicle::Model, ServiceError> {
    if input.number_plate.trim().is_empty() { return Err(ServiceError::Validation("number plate required".into())); }
    if input.mileage < 0 { return Err(ServiceError::Validation("mileage must be >= 0".into())); }
    let mut am: vehicle::ActiveModel = vehicle::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("vehicle"))?
        .into();
    am.vehicle_type = Set(input.vehicle_type);
    am.brand = Set(input.brand);
    am.model = Set(input.model);
    am.number_plate = Set(input.number_plate);
    am.release_date = Set(input.release_date);
    am.mileage = Set(input.mileage);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a vehicle.
pub async fn delete_vehicle(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    vehicle::hard_delete(db, id).await?;
    Ok(())
}
