use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, Set};

use models::{address, garage, garage_member};
use crate::errors::ServiceError;

/// Create a garage together with its address. The creating user becomes the
/// primary owner and the first member.
pub async fn create_garage(
    db: &DatabaseConnection,
    input: garage::NewGarage,
    garage_address: address::NewAddress,
    owner_id: Uuid,
) -> Result<garage::Model, ServiceError> {
    let addr = address::create(db, garage_address).await?;
    let created = garage::create(db, input, addr.id, Some(owner_id)).await?;
    garage_member::add(db, owner_id, created.id).await?;
    Ok(created)
}

/// Get a garage by id.
pub async fn get_garage(db: &DatabaseConnection, id: Uuid) -> Result<Option<garage::Model>, ServiceError> {
    let found = garage::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List all garages, optionally filtered by a case-insensitive name fragment.
pub async fn list_garages(db: &DatabaseConnection, name: Option<&str>) -> Result<Vec<garage::Model>, ServiceError> {
    let mut query = garage::Entity::find();
    if let Some(fragment) = name {
        let pattern = format!("%{}%", fragment.replace('%', "\\%").replace('_', "\\_"));
        query = query.filter(garage::Column::Name.like(&pattern));
    }
    let garages = query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(garages)
}

/// Update a garage's contact details.
pub async fn update_garage(db: &DatabaseConnection, id: Uuid, input: garage::NewGarage) -> Result<garage::Model, ServiceError> {
    if input.name.trim().is_empty() { return Err(ServiceError::Validation("garage name required".into())); }
    if !input.email.contains('@') { return Err(ServiceError::Validation("invalid email".into())); }
    let mut am: garage::ActiveModel = garage::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("garage"))?
        .into();
    am.name = Set(input.name);
    am.register_number = Set(input.register_number);
    am.phone = Set(input.phone);
    am.email = Set(input.email);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a garage and its address. Deleting the address cascades through
/// the garage row, which in turn cascades schedules, service types and
/// memberships.
pub async fn delete_garage(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let found = garage::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("garage"))?;
    address::hard_delete(db, found.address_id).await?;
    Ok(())
}

/// Add a user to the garage staff.
pub async fn add_member(db: &DatabaseConnection, garage_id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
    garage_member::add(db, user_id, garage_id).await?;
    Ok(())
}

/// Remove a user from the garage staff.
pub async fn remove_member(db: &DatabaseConnection, garage_id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
    garage_member::remove(db, user_id, garage_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::user;

    fn some_address() -> address::NewAddress {
        address::NewAddress {
            number: "3".into(),
            street_type: "avenue".into(),
            name: "des Champs".into(),
            town: "Paris".into(),
            postal_code: "75008".into(),
            latitude: Some(48.87),
            longitude: Some(2.3),
        }
    }

    #[tokio::test]
    async fn garage_lifecycle_with_owner_membership() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let email = format!("owner_{}@example.com", Uuid::new_v4());
        let owner = user::create(&db, &email, "$argon2$fake", "Gary", "Owner", "").await?;

        let g = create_garage(
            &db,
            garage::NewGarage {
                name: format!("garage_{}", Uuid::new_v4()),
                register_number: "RCS 123".into(),
                phone: "0100000000".into(),
                email: "shop@example.com".into(),
            },
            some_address(),
            owner.id,
        )
        .await?;
        assert_eq!(g.primary_owner_id, Some(owner.id));

        let memberships = garage_member::garages_of(&db, owner.id).await?;
        assert!(memberships.contains(&g.id));

        let fragment = &g.name[..10];
        let by_name = list_garages(&db, Some(fragment)).await?;
        assert!(by_name.iter().any(|m| m.id == g.id));

        delete_garage(&db, g.id).await?;
        assert!(get_garage(&db, g.id).await?.is_none());
        let after = garage_member::garages_of(&db, owner.id).await?;
        assert!(!after.contains(&g.id));

        user::hard_delete(&db, owner.id).await?;
        Ok(())
    }
}
