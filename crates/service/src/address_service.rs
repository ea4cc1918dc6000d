use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, Set};

use models::address;
use crate::errors::ServiceError;

/// Create an address.
pub async fn create_address(db: &DatabaseConnection, input: address::NewAddress) -> Result<address::Model, ServiceError> {
    let created = address::create(db, input).await?;
    Ok(created)
}

/// Get an address by id.
pub async fn get_address(db: &DatabaseConnection, id: Uuid) -> Result<Option<address::Model>, ServiceError> {
    let found = address::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Replace an address's fields.
pub async fn update_address(db: &DatabaseConnection, id: Uuid, input: address::NewAddress) -> Result<address::Model, ServiceError> {
    if input.name.trim().is_empty() { return Err(ServiceError::Validation("street name required".into())); }
    if input.town.trim().is_empty() { return Err(ServiceError::Validation("town required".into())); }
    let mut am: address::ActiveModel = address::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("address"))?
        .into();
    am.number = Set(input.number);
    am.street_type = Set(input.street_type);
    am.name = Set(input.name);
    am.town = Set(input.town);
    am.postal_code = Set(input.postal_code);
    am.latitude = Set(input.latitude);
    am.longitude = Set(input.longitude);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an address. Users pointing at it are detached (FK set null),
/// garages owning it cascade at the database level.
pub async fn delete_address(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    address::hard_delete(db, id).await?;
    Ok(())
}
