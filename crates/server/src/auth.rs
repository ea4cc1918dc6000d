use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use uuid::Uuid;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService, Claims};
use service::authz::Actor;
use service::geo::{GeoSearchService, NominatimGeocoder};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
    pub geo: Arc<GeoSearchService<NominatimGeocoder>>,
}

impl ServerState {
    fn auth_service(&self) -> AuthService<SeaOrmAuthRepository> {
        let repo = Arc::new(SeaOrmAuthRepository { db: self.db.clone() });
        AuthService::new(repo, AuthConfig { jwt_secret: Some(self.auth.jwt_secret.clone()) })
    }
}

/// The principal resolved for this request; `None` for anonymous requests,
/// which every policy denies uniformly.
#[derive(Clone)]
pub struct CurrentUser(pub Option<Actor>);

impl CurrentUser {
    pub fn actor(&self) -> Option<&Actor> {
        self.0.as_ref()
    }
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub token: String,
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterOutput>, ApiError> {
    models::user::validate_email(&input.email).map_err(|e| ApiError::bad_request(e.to_string()))?;
    models::user::validate_name(&input.firstname).map_err(|e| ApiError::bad_request(e.to_string()))?;
    models::user::validate_name(&input.lastname).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let created = state.auth_service().register(input).await?;
    Ok(Json(RegisterOutput { user_id: created.id }))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = state.auth_service().login(input).await?;
    let user = session.user;
    let Some(token) = session.token else {
        return Err(ApiError::internal("token generation failed"));
    };

    let mut cookie = Cookie::new("auth_token", token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(axum_extra::extract::cookie::SameSite::Lax);
    let jar = jar.add(cookie);
    let out = LoginOutput {
        user_id: user.id,
        email: user.email,
        firstname: user.firstname,
        lastname: user.lastname,
        token,
    };
    Ok((jar, Json(out)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from("auth_token"));
    (jar, StatusCode::NO_CONTENT)
}

/// Resolve the request's principal from `Authorization: Bearer <token>` or
/// the `auth_token` cookie. Anonymous requests pass through with
/// `CurrentUser(None)`; a present but invalid or expired token is a 401.
/// A valid token whose user no longer exists is treated as anonymous.
pub async fn identify(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_or_cookie_token(&req);

    let current = match token {
        None => CurrentUser(None),
        Some(token) => {
            let key = DecodingKey::from_secret(state.auth.jwt_secret.as_bytes());
            let mut validation = Validation::new(Algorithm::HS256);
            validation.validate_exp = true;

            let data = decode::<Claims>(&token, &key, &validation).map_err(|e| {
                tracing::warn!(path = %req.uri().path(), err = %e, "token validation failed");
                ApiError::unauthorized("invalid or expired token")
            })?;
            let user_id: Uuid = data
                .claims
                .uid
                .parse()
                .map_err(|_| ApiError::unauthorized("invalid or expired token"))?;

            let actor = Actor::load(&state.db, user_id)
                .await
                .map_err(|e| ApiError::internal(e.to_string()))?;
            CurrentUser(actor)
        }
    };

    req.extensions_mut().insert(current);
    Ok(next.run(req).await)
}

fn bearer_or_cookie_token(req: &Request) -> Option<String> {
    let authz = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if let Some(h) = authz {
        return h.strip_prefix("Bearer ").map(str::to_string);
    }

    let cookie_header = req
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    for part in cookie_header.split(';') {
        if let Some(rest) = part.trim().strip_prefix("auth_token=") {
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}
