use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, ReviewAction, ReviewSubject};
use service::review_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct ReviewUpdate {
    pub title: String,
    pub body: String,
    pub rating: i16,
}

/// Reviews left on a garage; public content on the search page.
pub async fn browse_for_garage(
    State(state): State<ServerState>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<models::review::Model>>, ApiError> {
    let items = review_service::list_reviews_for_garage(&state.db, garage_id).await?;
    Ok(Json(items))
}

/// Post a review. The candidate carries its author, and the policy requires
/// it to be the caller.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::review::NewReview>,
) -> Result<Json<models::review::Model>, ApiError> {
    let subject = ReviewSubject::from(&input);
    if !authorize(current.actor(), &AccessRequest::Review(ReviewAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = review_service::create_review(&state.db, input).await?;
    Ok(Json(created))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<ReviewUpdate>,
) -> Result<Json<models::review::Model>, ApiError> {
    let found = review_service::get_review(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("review not found"))?;
    let subject = ReviewSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Review(ReviewAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated =
        review_service::update_review(&state.db, id, input.title, input.body, input.rating).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = review_service::get_review(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("review not found"))?;
    let subject = ReviewSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Review(ReviewAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    review_service::delete_review(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
