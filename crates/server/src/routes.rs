use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::{self, ServerState};

pub mod addresses;
pub mod appointments;
pub mod garages;
pub mod reviews;
pub mod schedules;
pub mod service_types;
pub mod users;
pub mod vehicles;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: auth, the per-entity API (behind the
/// identity middleware) and the swagger doc.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new().route("/health", get(health));

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    let api = Router::new()
        .route("/api/users", get(users::browse))
        .route("/api/users/:id", get(users::read).put(users::edit).delete(users::remove))
        .route("/api/addresses", post(addresses::add))
        .route(
            "/api/addresses/:id",
            get(addresses::read).put(addresses::edit).delete(addresses::remove),
        )
        .route("/api/garages", get(garages::browse).post(garages::add))
        .route("/api/garages/:id", get(garages::read).put(garages::edit).delete(garages::remove))
        .route(
            "/api/garages/:id/members/:user_id",
            put(garages::add_member).delete(garages::remove_member),
        )
        .route("/api/garages/:id/appointments", get(appointments::browse_for_garage))
        .route("/api/garages/:id/reviews", get(reviews::browse_for_garage))
        .route("/api/garages/:id/schedules", get(schedules::browse_for_garage))
        .route("/api/garages/:id/service-types", get(service_types::browse_for_garage))
        .route("/api/vehicles", get(vehicles::browse).post(vehicles::add))
        .route(
            "/api/vehicles/:id",
            get(vehicles::read).put(vehicles::edit).delete(vehicles::remove),
        )
        .route("/api/appointments", get(appointments::browse).post(appointments::add))
        .route(
            "/api/appointments/:id",
            get(appointments::read).put(appointments::edit).delete(appointments::remove),
        )
        .route("/api/reviews", post(reviews::add))
        .route("/api/reviews/:id", put(reviews::edit).delete(reviews::remove))
        .route("/api/schedules", post(schedules::add))
        .route("/api/schedules/:id", put(schedules::edit).delete(schedules::remove))
        .route("/api/service-types", post(service_types::add))
        .route(
            "/api/service-types/:id",
            put(service_types::edit).delete(service_types::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::identify));

    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    public
        .merge(auth_routes)
        .merge(api)
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
