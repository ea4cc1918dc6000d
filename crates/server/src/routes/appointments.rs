use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::appointment_service;
use service::authz::{
    authorize, AccessRequest, AppointmentAction, AppointmentSubject, GarageAction, GarageSubject,
};
use service::garage_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

/// The caller's own bookings.
pub async fn browse(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<models::appointment::Model>>, ApiError> {
    let Some(actor) = current.actor() else {
        return Err(ApiError::forbidden());
    };
    let items = appointment_service::list_appointments_of(&state.db, actor.id).await?;
    Ok(Json(items))
}

/// A garage's planning, open to its staff.
pub async fn browse_for_garage(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(garage_id): Path<Uuid>,
) -> Result<Json<Vec<models::appointment::Model>>, ApiError> {
    let found = garage_service::get_garage(&state.db, garage_id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Browse, &subject)) {
        return Err(ApiError::forbidden());
    }
    let items = appointment_service::list_appointments_for_garage(&state.db, garage_id).await?;
    Ok(Json(items))
}

/// Book an appointment. The candidate carries its intended owner, so staff
/// may also book on behalf of a customer at their own garage.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::appointment::NewAppointment>,
) -> Result<Json<models::appointment::Model>, ApiError> {
    let subject = AppointmentSubject::from(&input);
    if !authorize(current.actor(), &AccessRequest::Appointment(AppointmentAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = appointment_service::create_appointment(&state.db, input).await?;
    Ok(Json(created))
}

pub async fn read(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::appointment::Model>, ApiError> {
    let found = appointment_service::get_appointment(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("appointment not found"))?;
    let subject = AppointmentSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Appointment(AppointmentAction::Read, &subject)) {
        return Err(ApiError::forbidden());
    }
    Ok(Json(found))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::appointment::NewAppointment>,
) -> Result<Json<models::appointment::Model>, ApiError> {
    let found = appointment_service::get_appointment(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("appointment not found"))?;
    let subject = AppointmentSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Appointment(AppointmentAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = appointment_service::update_appointment(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = appointment_service::get_appointment(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("appointment not found"))?;
    let subject = AppointmentSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Appointment(AppointmentAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    appointment_service::delete_appointment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
