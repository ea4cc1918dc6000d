use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, AddressAction, AddressSubject, UserAction, UserSubject};
use service::{address_service, user_service};

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

/// Create the caller's home address and attach it to their account.
/// Ownership of an address lives on the user row, so creating one is an
/// edit of the caller's own account.
pub async fn add(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(input): Json<models::address::NewAddress>,
) -> Result<Json<models::address::Model>, ApiError> {
    let Some(actor) = current.actor() else {
        return Err(ApiError::forbidden());
    };
    let subject = UserSubject { id: actor.id };
    if !authorize(current.actor(), &AccessRequest::User(UserAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let created = address_service::create_address(&state.db, input).await?;
    user_service::set_address(&state.db, actor.id, Some(created.id)).await?;
    Ok(Json(created))
}

pub async fn read(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::address::Model>, ApiError> {
    let found = address_service::get_address(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("address not found"))?;
    let subject = AddressSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::Address(AddressAction::Read, &subject)) {
        return Err(ApiError::forbidden());
    }
    Ok(Json(found))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<models::address::NewAddress>,
) -> Result<Json<models::address::Model>, ApiError> {
    let subject = AddressSubject { id };
    if !authorize(current.actor(), &AccessRequest::Address(AddressAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = address_service::update_address(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let subject = AddressSubject { id };
    if !authorize(current.actor(), &AccessRequest::Address(AddressAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    address_service::delete_address(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
