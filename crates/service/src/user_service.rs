use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, Set};

use models::user;
use crate::{errors::ServiceError, pagination::Pagination};

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfileUpdate {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
}

/// Get a user by id.
pub async fn get_user(db: &DatabaseConnection, id: Uuid) -> Result<Option<user::Model>, ServiceError> {
    let found = user::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Update a user's profile fields. Only provided fields change.
pub async fn update_profile(db: &DatabaseConnection, id: Uuid, changes: ProfileUpdate) -> Result<user::Model, ServiceError> {
    if let Some(firstname) = &changes.firstname { user::validate_name(firstname)?; }
    if let Some(lastname) = &changes.lastname { user::validate_name(lastname)?; }
    let mut am: user::ActiveModel = user::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?
        .into();
    if let Some(firstname) = changes.firstname { am.firstname = Set(firstname); }
    if let Some(lastname) = changes.lastname { am.lastname = Set(lastname); }
    if let Some(phone) = changes.phone { am.phone = Set(phone); }
    if let Some(dob) = changes.date_of_birth { am.date_of_birth = Set(Some(dob)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Attach (or detach) the user's home address.
pub async fn set_address(db: &DatabaseConnection, id: Uuid, address_id: Option<Uuid>) -> Result<user::Model, ServiceError> {
    let mut am: user::ActiveModel = user::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?
        .into();
    am.address_id = Set(address_id);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Hard-delete a user together with their home address. Owned vehicles,
/// reviews and appointments cascade at the database level; the address FK
/// points from user to address, so that row is removed here.
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let found = user::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?;
    user::hard_delete(db, id).await?;
    if let Some(address_id) = found.address_id {
        models::address::hard_delete(db, address_id).await?;
    }
    Ok(())
}

/// List users with pagination.
pub async fn list_users(db: &DatabaseConnection, opts: Pagination) -> Result<Vec<user::Model>, ServiceError> {
    use sea_orm::PaginatorTrait;
    let (page_idx, per_page) = opts.window();
    let users = user::Entity::find()
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn user_profile_lifecycle() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let email = format!("svc_{}@example.com", Uuid::new_v4());
        let u = user::create(&db, &email, "$argon2$fake", "Jane", "Doe", "0600000000").await?;
        assert_eq!(u.email, email);

        let found = get_user(&db, u.id).await?.unwrap();
        assert_eq!(found.id, u.id);

        let updated = update_profile(
            &db,
            u.id,
            ProfileUpdate { firstname: Some("Janet".into()), ..ProfileUpdate::default() },
        )
        .await?;
        assert_eq!(updated.firstname, "Janet");
        assert_eq!(updated.lastname, "Doe");

        let addr = models::address::create(
            &db,
            models::address::NewAddress {
                number: "12".into(),
                street_type: "rue".into(),
                name: "de la Paix".into(),
                town: "Paris".into(),
                postal_code: "75002".into(),
                latitude: None,
                longitude: None,
            },
        )
        .await?;
        let with_addr = set_address(&db, u.id, Some(addr.id)).await?;
        assert_eq!(with_addr.address_id, Some(addr.id));

        // Deleting the account takes its home address with it
        delete_user(&db, u.id).await?;
        assert!(get_user(&db, u.id).await?.is_none());
        let orphan = models::address::Entity::find_by_id(addr.id)
            .one(&db)
            .await?;
        assert!(orphan.is_none());
        Ok(())
    }
}
