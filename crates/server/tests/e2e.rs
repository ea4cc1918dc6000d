use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tokio::net::TcpListener;
use serde_json::json;
use uuid::Uuid;
use reqwest::StatusCode as HttpStatusCode;
use migration::MigratorTrait;

use server::auth::{ServerAuthConfig, ServerState};
use server::routes;
use service::geo::{GeoSearchService, NominatimGeocoder};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await { eprintln!("migrations notice: {}", e); }

    let geocoder = NominatimGeocoder::new("https://nominatim.openstreetmap.org", Duration::from_secs(5))?;
    let state = ServerState {
        db,
        auth: ServerAuthConfig { jwt_secret: "test-secret".into() },
        geo: Arc::new(GeoSearchService::new(Arc::new(geocoder), 100.0, 10)),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

/// Register and log in a fresh user; the returned client carries the
/// session cookie.
async fn signed_in_user(base_url: &str) -> anyhow::Result<(reqwest::Client, Uuid)> {
    let c = client();
    let email = format!("user_{}@example.com", Uuid::new_v4());
    let password = "S3curePass!";

    let res = c.post(format!("{}/auth/register", base_url))
        .json(&json!({
            "email": email, "password": password,
            "firstname": "Test", "lastname": "User"
        }))
        .send().await?;
    anyhow::ensure!(res.status() == HttpStatusCode::OK, "register failed");
    let body = res.json::<serde_json::Value>().await?;
    let user_id: Uuid = body["user_id"].as_str().unwrap().parse()?;

    let res = c.post(format!("{}/auth/login", base_url))
        .json(&json!({"email": email, "password": password}))
        .send().await?;
    anyhow::ensure!(res.status() == HttpStatusCode::OK, "login failed");
    Ok((c, user_id))
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_vehicle_ownership_enforced() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let (owner, _) = signed_in_user(&app.base_url).await?;
    let (stranger, _) = signed_in_user(&app.base_url).await?;

    // Owner registers a vehicle
    let res = owner.post(format!("{}/api/vehicles", app.base_url))
        .json(&json!({
            "vehicle_type": "car", "brand": "Peugeot", "model": "208",
            "number_plate": format!("AA-{}-BB", Uuid::new_v4()),
            "release_date": null, "mileage": 42000
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let vehicle = res.json::<serde_json::Value>().await?;
    let vehicle_id = vehicle["id"].as_str().unwrap();

    // Owner can read it back
    let res = owner.get(format!("{}/api/vehicles/{}", app.base_url, vehicle_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Another signed-in user is denied
    let res = stranger.get(format!("{}/api/vehicles/{}", app.base_url, vehicle_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Access Denied");

    // Anonymous requests are denied too
    let res = reqwest::Client::new()
        .get(format!("{}/api/vehicles/{}", app.base_url, vehicle_id))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn e2e_garage_back_office_members_only() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };

    let (owner, _) = signed_in_user(&app.base_url).await?;
    let (stranger, _) = signed_in_user(&app.base_url).await?;

    let res = owner.post(format!("{}/api/garages", app.base_url))
        .json(&json!({
            "garage": {
                "name": format!("garage_{}", Uuid::new_v4()),
                "register_number": "RCS 123", "phone": "0100000000",
                "email": "shop@example.com"
            },
            "address": {
                "number": "3", "street_type": "avenue", "name": "des Champs",
                "town": "Paris", "postal_code": "75008",
                "latitude": 48.87, "longitude": 2.3
            }
        }))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let garage = res.json::<serde_json::Value>().await?;
    let garage_id = garage["id"].as_str().unwrap();

    // Back office: owner in, stranger out
    let res = owner.get(format!("{}/api/garages/{}", app.base_url, garage_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = stranger.get(format!("{}/api/garages/{}", app.base_url, garage_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);

    // Public search by name needs no session
    let name = garage["name"].as_str().unwrap();
    let res = reqwest::Client::new()
        .get(format!("{}/api/garages", app.base_url))
        .query(&[("name", name)])
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_expired_token_unauthorized() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = reqwest::Client::new();

    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Claims { sub: String, uid: String, exp: usize }
    let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH)?.as_secs() as usize;
    let claims = Claims {
        sub: "u@example.com".into(),
        uid: Uuid::new_v4().to_string(),
        exp: now.saturating_sub(60),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret("test-secret".as_bytes()))?;

    let res = c.get(format!("{}/api/vehicles", app.base_url))
        .header("Authorization", format!("Bearer {}", token))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    // The rejection carries the uniform {code, message} body
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], 401);
    assert_eq!(body["message"], "invalid or expired token");
    Ok(())
}
