use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::geo::{GeoSearchService, NominatimGeocoder};

use crate::auth::{ServerAuthConfig, ServerState};
use crate::routes;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: &configs::AppConfig) -> anyhow::Result<SocketAddr> {
    let (host, port) = {
        let s = &cfg.server;
        if s.host.trim().is_empty() {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        } else {
            (s.host.clone(), s.port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::load_default().unwrap_or_default();
    cfg.geocoder.validate()?;

    // DB connection
    let db = models::db::connect().await?;

    // Geocoder-backed garage search
    let geocoder = NominatimGeocoder::new(
        cfg.geocoder.base_url.clone(),
        Duration::from_secs(cfg.geocoder.timeout_secs),
    )?;
    let geo = Arc::new(GeoSearchService::new(
        Arc::new(geocoder),
        cfg.geocoder.default_radius_km,
        cfg.geocoder.max_results,
    ));

    // JWT secret
    let jwt_secret =
        std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string());
    let state = ServerState {
        db,
        auth: ServerAuthConfig { jwt_secret },
        geo,
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting garage booking server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
