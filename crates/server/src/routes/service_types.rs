use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, ServiceTypeAction, ServiceTypeSubject};
use service::service_type_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

/// A garage's service catalogue; public content on the search page.
pub async fn browse_for_garage(
    State(state): State<ServerState>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<models::service_type::Model>>, ApiError> {
    let items = service_type_service::list_service_types_for_garage(&state.db, garage_id).await?;
    Ok(Json(items))
}

/// Add a catalogue entry; reserved for the garage's staff.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::service_type::NewServiceType>,
) -> Result<Json<models::service_type::Model>, ApiError> {
    let subject = ServiceTypeSubject::from(&input);
    if !authorize(current.actor(), &AccessRequest::ServiceType(ServiceTypeAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = service_type_service::create_service_type(&state.db, input).await?;
    Ok(Json(created))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::service_type::NewServiceType>,
) -> Result<Json<models::service_type::Model>, ApiError> {
    let found = service_type_service::get_service_type(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("service type not found"))?;
    let subject = ServiceTypeSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::ServiceType(ServiceTypeAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = service_type_service::update_service_type(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = service_type_service::get_service_type(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("service type not found"))?;
    let subject = ServiceTypeSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::ServiceType(ServiceTypeAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    service_type_service::delete_service_type(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
