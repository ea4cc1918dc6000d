use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, ScheduleAction, ScheduleSubject};
use service::schedule_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

/// A garage's opening hours; public content on the search page.
pub async fn browse_for_garage(
    State(state): State<ServerState>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<models::schedule::Model>>, ApiError> {
    let items = schedule_service::list_schedules_for_garage(&state.db, garage_id).await?;
    Ok(Json(items))
}

/// Add an opening-hours slot; reserved for the garage's staff.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::schedule::NewSchedule>,
) -> Result<Json<models::schedule::Model>, ApiError> {
    let subject = ScheduleSubject::from(&input);
    if !authorize(current.actor(), &AccessRequest::Schedule(ScheduleAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = schedule_service::create_schedule(&state.db, input).await?;
    Ok(Json(created))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::schedule::NewSchedule>,
) -> Result<Json<models::schedule::Model>, ApiError> {
    let found = schedule_service::get_schedule(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("schedule not found"))?;
    let subject = ScheduleSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Schedule(ScheduleAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = schedule_service::update_schedule(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = schedule_service::get_schedule(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("schedule not found"))?;
    let subject = ScheduleSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Schedule(ScheduleAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    schedule_service::delete_schedule(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
