use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, VehicleAction, VehicleSubject};
use service::vehicle_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

/// The caller's own vehicles.
pub async fn browse(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<models::vehicle::Model>>, ApiError> {
    let Some(actor) = current.actor() else {
        return Err(ApiError::forbidden());
    };
    let vehicles = vehicle_service::list_vehicles_of(&state.db, actor.id).await?;
    Ok(Json(vehicles))
}

pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::vehicle::NewVehicle>,
) -> Result<Json<models::vehicle::Model>, ApiError> {
    let Some(actor) = current.actor() else {
        return Err(ApiError::forbidden());
    };
    let subject = VehicleSubject { owner_id: Some(actor.id) };
    if !authorize(current.actor(), &AccessRequest::Vehicle(VehicleAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = vehicle_service::create_vehicle(&state.db, input, actor.id).await?;
    Ok(Json(created))
}

pub async fn read(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::vehicle::Model>, ApiError> {
    let found = vehicle_service::get_vehicle(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    let subject = VehicleSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Vehicle(VehicleAction::Read, &subject)) {
        return Err(ApiError::forbidden());
    }
    Ok(Json(found))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::vehicle::NewVehicle>,
) -> Result<Json<models::vehicle::Model>, ApiError> {
    let found = vehicle_service::get_vehicle(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    let subject = VehicleSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Vehicle(VehicleAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = vehicle_service::update_vehicle(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = vehicle_service::get_vehicle(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("vehicle not found"))?;
    let subject = VehicleSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Vehicle(VehicleAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    vehicle_service::delete_vehicle(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
