use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use service::authz::{authorize, AccessRequest, UserAction, UserSubject};
use service::pagination::Pagination;
use service::user_service;

use crate::auth::{CurrentUser, ServerState};
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct BrowseQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Browse accounts. Each row is checked against the policy, so a plain
/// user only ever sees their own account while an admin sees all.
pub async fn browse(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Query(q): Query<BrowseQuery>,
) -> Result<Json<Vec<models::user::Model>>, ApiError> {
    let opts = Pagination::from_query(q.page, q.per_page);
    let users = user_service::list_users(&state.db, opts).await?;
    let visible: Vec<_> = users
        .into_iter()
        .filter(|u| {
            let subject = UserSubject::from(&*u);
            authorize(current.actor(), &AccessRequest::User(UserAction::Browse, &subject))
        })
        .collect();
    Ok(Json(visible))
}

pub async fn read(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::user::Model>, ApiError> {
    let found = user_service::get_user(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;
    let subject = UserSubject::from(&found);
    if !authorize(current.actor(), &AccessRequest::User(UserAction::Read, &subject)) {
        return Err(ApiError::forbidden());
    }
    Ok(Json(found))
}

pub async fn edit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(changes): Json<user_service::ProfileUpdate>,
) -> Result<Json<models::user::Model>, ApiError> {
    let subject = UserSubject { id };
    if !authorize(current.actor(), &AccessRequest::User(UserAction::Edit, &subject)) {
        return Err(ApiError::forbidden());
    }
    let updated = user_service::update_profile(&state.db, id, changes).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let subject = UserSubject { id };
    if !authorize(current.actor(), &AccessRequest::User(UserAction::Delete, &subject)) {
        return Err(ApiError::forbidden());
    }
    user_service::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
