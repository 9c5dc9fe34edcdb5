use crate::app::create_app;
use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "admin-pass";

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    // Dropping the directory removes the database and uploads.
    _dir: TempDir,
}

pub async fn spawn() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("test.db");
    let public_dir = dir.path().join("public");
    let upload_dir = public_dir.join("uploads");
    std::fs::create_dir_all(&upload_dir).expect("upload dir");

    let config = AppConfig {
        server_port: 0,
        database_url: format!("sqlite://{}", db_path.display()),
        jwt_secret: "user-secret".to_string(),
        admin_jwt_secret: "admin-secret".to_string(),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
        public_dir,
        upload_dir,
        max_upload_bytes: 1024 * 1024,
    };

    let db = pool::connect_to_db(&config.database_url).await.expect("connect");
    pool::run_migrations(&db).await.expect("migrate");

    let state = AppState::new(config, db);
    AuthService::ensure_admin_user(&state).await.expect("seed admin");

    TestApp {
        router: create_app(state.clone()),
        state,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router.clone().oneshot(req).await.expect("request");
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        self.send(req.expect("request builder")).await
    }

    /// Registers a user and returns `(user_id, token)`.
    pub async fn register(&self, username: &str, password: &str) -> (i64, String) {
        let (status, body) = self
            .json(
                Method::POST,
                "/api/auth/register",
                None,
                Some(serde_json::json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        (
            body["user"]["id"].as_i64().expect("user id"),
            body["token"].as_str().expect("token").to_string(),
        )
    }

    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .json(
                Method::POST,
                "/api/auth/admin/login",
                None,
                Some(serde_json::json!({ "username": "admin", "password": ADMIN_PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().expect("token").to_string()
    }

    /// Creates a show with one episode and returns `(show_id, episode_id)`.
    pub async fn seed_episode(&self, admin: &str) -> (i64, i64) {
        let (status, show) = self
            .json(
                Method::POST,
                "/api/admin/shows",
                Some(admin),
                Some(serde_json::json!({ "title": "Night Harbor", "genres": "Drama" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{show}");
        let show_id = show["id"].as_i64().expect("show id");

        let episode_id = self.add_episode(admin, show_id, 1, "Pilot").await;
        (show_id, episode_id)
    }

    pub async fn add_episode(&self, admin: &str, show_id: i64, ep_number: i64, title: &str) -> i64 {
        let (status, ep) = self
            .json(
                Method::POST,
                "/api/admin/episodes",
                Some(admin),
                Some(serde_json::json!({
                    "show_id": show_id,
                    "ep_number": ep_number,
                    "title": title,
                    "duration": 1440
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{ep}");
        ep["id"].as_i64().expect("episode id")
    }
}

pub const BOUNDARY: &str = "X-STREAMHUB-BOUNDARY";

/// Single-file multipart request. `complete = false` drops the closing
/// boundary so the file stream ends mid-field.
pub fn multipart_request(
    uri: &str,
    token: &str,
    field: &str,
    file_name: &str,
    contents: &str,
    complete: bool,
) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}"
    );
    if complete {
        body.push_str(&format!("\r\n--{BOUNDARY}--\r\n"));
    }

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .expect("multipart request")
}
