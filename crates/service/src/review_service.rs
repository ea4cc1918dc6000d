use uuid::Uuid;
use chrono::Utc;
use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryFilter, ColumnTrait, QuerySelect, Set};

use models::{garage, review};
use crate::errors::ServiceError;

/// Post a review, then refresh the garage's average rating.
pub async fn create_review(db: &DatabaseConnection, input: review::NewReview) -> Result<review::Model, ServiceError> {
    let created = review::create(db, input).await?;
    if let Some(garage_id) = created.garage_id {
        refresh_rating(db, garage_id).await?;
    }
    Ok(created)
}

/// Get a review by id.
pub async fn get_review(db: &DatabaseConnection, id: Uuid) -> Result<Option<review::Model>, ServiceError> {
    let found = review::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// List reviews left on a garage.
pub async fn list_reviews_for_garage(db: &DatabaseConnection, garage_id: Uuid) -> Result<Vec<review::Model>, ServiceError> {
    let items = review::Entity::find()
        .filter(review::Column::GarageId.eq(garage_id))
        .all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(items)
}

/// Edit a review's text and rating; authorship does not change.
pub async fn update_review(db: &DatabaseConnection, id: Uuid, title: String, body: String, rating: i16) -> Result<review::Model, ServiceError> {
    if !(0..=5).contains(&rating) { return Err(ServiceError::Validation("rating must be 0..=5".into())); }
    let mut am: review::ActiveModel = review::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("review"))?
        .into();
    am.title = Set(title);
    am.body = Set(body);
    am.rating = Set(rating);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(garage_id) = updated.garage_id {
        refresh_rating(db, garage_id).await?;
    }
    Ok(updated)
}

/// Remove a review, then refresh the garage's average rating.
pub async fn delete_review(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let found = review::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    review::hard_delete(db, id).await?;
    if let Some(garage_id) = found.and_then(|r| r.garage_id) {
        refresh_rating(db, garage_id).await?;
    }
    Ok(())
}

/// Recompute the denormalized average rating stored on the garage row.
async fn refresh_rating(db: &DatabaseConnection, garage_id: Uuid) -> Result<(), ServiceError> {
    let ratings: Vec<i16> = review::Entity::find()
        .filter(review::Column::GarageId.eq(garage_id))
        .select_only()
        .column(review::Column::Rating)
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let average = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64)
    };

    let Some(found) = garage::Entity::find_by_id(garage_id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
    else {
        return Ok(());
    };
    let mut am: garage::ActiveModel = found.into();
    am.rating = Set(average);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
