use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, GarageAction, GarageSubject};
use service::garage_service;
use service::geo::GarageHit;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct BrowseQuery {
    /// Case-sensitive name fragment (LIKE search).
    pub name: Option<String>,
    /// Free-text address for the proximity search.
    pub address: Option<String>,
    /// Radius in km; the configured default applies when absent.
    pub radius: Option<f64>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum BrowseOutput {
    Plain(Vec<models::garage::Model>),
    Ranked(Vec<GarageHit>),
}

#[derive(Deserialize)]
pub struct CreateGarageInput {
    pub garage: models::garage::NewGarage,
    pub address: models::address::NewAddress,
}

/// Public garage search. With `?address=` the garages are ranked by
/// great-circle distance from the geocoded point; with `?name=` they are
/// filtered by name; otherwise all garages are listed.
#[utoipa::path(get, path = "/api/garages", tag = "garage",
    params(("name" = Option<String>, Query, description = "name fragment"),
           ("address" = Option<String>, Query, description = "free-text address"),
           ("radius" = Option<f64>, Query, description = "radius in km")),
    responses((status = 200, description = "Matching garages"),
              (status = 400, description = "Bad Request"),
              (status = 404, description = "No Garage was found")))]
pub async fn browse(
    State(state): State<ServerState>,
    Query(q): Query<BrowseQuery>,
) -> Result<Json<BrowseOutput>, ApiError> {
    if let Some(address) = q.address.as_deref() {
        let hits = state
            .geo
            .rank_garages_by_address(&state.db, address, q.radius)
            .await?;
        if hits.is_empty() {
            return Err(ApiError::not_found("No Garage was found"));
        }
        return Ok(Json(BrowseOutput::Ranked(hits)));
    }

    let garages = garage_service::list_garages(&state.db, q.name.as_deref()).await?;
    Ok(Json(BrowseOutput::Plain(garages)))
}

/// Back-office view of one garage, open to its staff.
pub async fn read(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::garage::Model>, ApiError> {
    let found = garage_service::get_garage(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Browse, &subject)) {
        return Err(ApiError::forbidden());
    }
    Ok(Json(found))
}

/// Open a garage. The caller becomes its primary owner and first member.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<CreateGarageInput>,
) -> Result<Json<models::garage::Model>, ApiError> {
    let Some(actor) = current.actor() else {
        return Err(ApiError::forbidden());
    };
    // Candidate subject: the caller is the intended primary owner.
    let subject = GarageSubject { id: Uuid::nil(), primary_owner_id: Some(actor.id) };
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Add, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = garage_service::create_garage(&state.db, input.garage, input.address, actor.id).await?;
    Ok(Json(created))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::garage::NewGarage>,
) -> Result<Json<models::garage::Model>, ApiError> {
    let found = garage_service::get_garage(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = garage_service::update_garage(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let found = garage_service::get_garage(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    garage_service::delete_garage(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Staff management is an edit of the garage, reserved for the primary owner.
pub async fn add_member(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let found = garage_service::get_garage(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    garage_service::add_member(&state.db, id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_member(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let found = garage_service::get_garage(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("garage not found"))?;
    let subject = GarageSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Garage(GarageAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    garage_service::remove_member(&state.db, id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
