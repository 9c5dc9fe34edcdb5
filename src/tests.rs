use crate::modules::auth::repository::AuthRepository;
use crate::modules::auth::token::{self, KeyTier};
use crate::modules::history::repository::HistoryRepository;
use crate::test_support::{multipart_request, spawn};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use time::macros::datetime;
use time::Duration;

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let app = spawn().await;
    app.register("alice", "secret-pw").await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": "alice", "password": "other-pw" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already exists");
    let count = AuthRepository::count_by_username(&app.state.db, "alice").await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn register_requires_username_and_password() {
    let app = spawn().await;
    let (status, body) = app
        .json(Method::POST, "/api/auth/register", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn login_failures_look_the_same() {
    let app = spawn().await;
    app.register("bob", "correct-pw").await;

    let (unknown_status, unknown) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "nobody", "password": "correct-pw" })),
        )
        .await;
    let (wrong_status, wrong) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "bob", "password": "wrong-pw" })),
        )
        .await;

    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown["error"], wrong["error"]);

    let (status, ok) = app
        .json(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "bob", "password": "correct-pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok["token_type"], "Bearer");
}

#[tokio::test]
async fn admin_login_refuses_regular_accounts() {
    let app = spawn().await;
    app.register("carol", "carol-pw").await;

    let (status, _) = app
        .json(
            Method::POST,
            "/api/auth/admin/login",
            None,
            Some(json!({ "username": "carol", "password": "carol-pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .json(
            Method::POST,
            "/api/auth/admin/login",
            None,
            Some(json!({ "username": "admin", "password": "not-it" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let token = app.admin_token().await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn token_tiers_are_not_interchangeable() {
    let app = spawn().await;
    let (_, user_token) = app.register("dave", "dave-pw").await;
    let admin_token = app.admin_token().await;

    let (status, _) = app.json(Method::GET, "/api/admin/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .json(Method::GET, "/api/admin/stats", Some(&user_token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .json(Method::GET, "/api/auth/me", Some(&admin_token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .json(Method::GET, "/api/admin/stats", Some(&admin_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    // The seeded admin and dave.
    assert_eq!(body["users"], 2);

    let (status, me) = app
        .json(Method::GET, "/api/auth/me", Some(&user_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "dave");
}

#[tokio::test]
async fn progress_updates_keep_one_row_per_episode() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (_, episode_id) = app.seed_episode(&admin).await;
    let (user_id, token) = app.register("erin", "erin-pw").await;

    for progress in [12.5, 40.0] {
        let (status, body) = app
            .json(
                Method::POST,
                "/api/history/update",
                Some(&token),
                Some(json!({ "episode_id": episode_id, "progress": progress })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }

    let rows = HistoryRepository::count_rows(&app.state.db, user_id, episode_id).await.unwrap();
    assert_eq!(rows, 1);

    let (status, body) = app
        .json(Method::GET, &format!("/api/history/{episode_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress"].as_f64(), Some(40.0));
    assert!(body["last_watched_at"].is_string());

    let (status, list) = app.json(Method::GET, "/api/history", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = list.as_array().expect("history list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["show_title"], "Night Harbor");
}

#[tokio::test]
async fn untouched_episode_reports_zero_progress() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (_, episode_id) = app.seed_episode(&admin).await;
    let (_, token) = app.register("frank", "frank-pw").await;

    let (status, body) = app
        .json(Method::GET, &format!("/api/history/{episode_id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress"].as_f64(), Some(0.0));
    assert!(body["last_watched_at"].is_null());
}

#[tokio::test]
async fn progress_update_validates_input() {
    let app = spawn().await;
    let (_, token) = app.register("gina", "gina-pw").await;

    let (status, _) = app
        .json(
            Method::POST,
            "/api/history/update",
            Some(&token),
            Some(json!({ "progress": 5.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .json(
            Method::POST,
            "/api/history/update",
            Some(&token),
            Some(json!({ "episode_id": 9999, "progress": 5.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json(
            Method::POST,
            "/api/history/update",
            None,
            Some(json!({ "episode_id": 1, "progress": 5.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn deleting_a_show_removes_its_episodes() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (show_id, episode_id) = app.seed_episode(&admin).await;

    let (status, ep) = app
        .json(Method::GET, &format!("/api/episodes/{episode_id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ep["show_title"], "Night Harbor");

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/admin/shows/{show_id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .json(Method::GET, &format!("/api/episodes/{episode_id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_titles_and_rejects_blank_queries() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    app.seed_episode(&admin).await;

    let (status, _) = app.json(Method::GET, "/api/search?q=%20", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.json(Method::GET, "/api/search?q=harb", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shows"].as_array().map(Vec::len), Some(1));

    let (_, body) = app.json(Method::GET, "/api/search?q=pilot", None, None).await;
    assert_eq!(body["episodes"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn admin_upload_stores_files_under_the_public_dir() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    let req = multipart_request("/api/admin/upload", &admin, "poster", "cover.png", "not really a png", true);
    let (status, res) = app.send(req).await;
    assert_eq!(status, StatusCode::CREATED, "{res}");

    let path = res["files"]["poster"].as_str().expect("poster path");
    assert!(path.starts_with("/uploads/images/"));
    assert!(path.ends_with(".png"));

    let relative = path.trim_start_matches("/uploads/");
    let stored = app.state.config.upload_dir.join(relative);
    assert_eq!(std::fs::read(stored).unwrap(), b"not really a png");

    let served = Request::builder().uri(path).body(Body::empty()).unwrap();
    let res = tower::ServiceExt::oneshot(app.router.clone(), served).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_upload_without_files_is_rejected() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    let boundary = "EMPTY-BOUNDARY";
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload")
        .header(header::AUTHORIZATION, format!("Bearer {admin}"))
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(format!("--{boundary}--\r\n")))
        .unwrap();

    let (status, _) = app.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn history_is_ordered_by_last_watch_within_the_same_second() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (show_id, first) = app.seed_episode(&admin).await;
    let second = app.add_episode(&admin, show_id, 2, "Undertow").await;
    let (user_id, token) = app.register("hana", "hana-pw").await;

    let base = datetime!(2025-03-01 10:00:05 UTC);
    HistoryRepository::upsert_progress(&app.state.db, user_id, first, 10.0, base + Duration::nanoseconds(123_400_000))
        .await
        .unwrap();
    HistoryRepository::upsert_progress(&app.state.db, user_id, second, 20.0, base + Duration::nanoseconds(123_450_000))
        .await
        .unwrap();

    let (status, list) = app.json(Method::GET, "/api/history", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let order: Vec<i64> = list
        .as_array()
        .expect("history list")
        .iter()
        .map(|e| e["episode_id"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![second, first]);

    // Rewatching the first episode moves it back to the top.
    HistoryRepository::upsert_progress(&app.state.db, user_id, first, 15.0, base + Duration::nanoseconds(123_500_000))
        .await
        .unwrap();
    let (_, list) = app.json(Method::GET, "/api/history", Some(&token), None).await;
    assert_eq!(list[0]["episode_id"].as_i64(), Some(first));
}

#[tokio::test]
async fn malformed_request_bodies_get_a_json_400() {
    let app = spawn().await;
    let (_, token) = app.register("ivan", "ivan-pw").await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/history/update",
            Some(&token),
            Some(json!({ "episode_id": 1, "progress": "abc" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = app
        .json(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": 12345, "password": "secret-pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let no_content_type = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .body(Body::from(r#"{"username":"ivan","password":"ivan-pw"}"#))
        .unwrap();
    let (status, body) = app.send(no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = app.json(Method::GET, "/api/shows/not-a-number", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}

#[tokio::test]
async fn admin_key_without_admin_flag_is_forbidden() {
    let app = spawn().await;
    let unflagged = token::issue(&app.state.config, 1, "admin", false, KeyTier::Admin, Duration::hours(1)).unwrap();

    let (status, body) = app
        .json(Method::GET, "/api/admin/stats", Some(&unflagged), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn expired_tokens_are_rejected_by_the_guards() {
    let app = spawn().await;
    let (user_id, _) = app.register("judy", "judy-pw").await;

    let expired_user =
        token::issue(&app.state.config, user_id, "judy", false, KeyTier::User, Duration::minutes(-5)).unwrap();
    let (status, _) = app.json(Method::GET, "/api/auth/me", Some(&expired_user), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.json(Method::GET, "/api/history", Some(&expired_user), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let expired_admin =
        token::issue(&app.state.config, 1, "admin", true, KeyTier::Admin, Duration::minutes(-5)).unwrap();
    let (status, _) = app
        .json(Method::GET, "/api/admin/stats", Some(&expired_admin), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn history_entries_can_be_removed() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (_, episode_id) = app.seed_episode(&admin).await;
    let (_, token) = app.register("kate", "kate-pw").await;
    let uri = format!("/api/history/{episode_id}");

    let (status, _) = app.json(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.json(
        Method::POST,
        "/api/history/update",
        Some(&token),
        Some(json!({ "episode_id": episode_id, "progress": 300.0 })),
    )
    .await;

    let (status, body) = app.json(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, body) = app.json(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(body["progress"].as_f64(), Some(0.0));

    let (status, _) = app.json(Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn categories_round_trip_through_admin_routes() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    let (status, created) = app
        .json(Method::POST, "/api/admin/categories", Some(&admin), Some(json!({ "name": "Slice of Life" })))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["slug"], "slice-of-life");
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .json(Method::POST, "/api/admin/categories", Some(&admin), Some(json!({ "name": "Slice of Life" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = app
        .json(
            Method::PUT,
            &format!("/api/admin/categories/{id}"),
            Some(&admin),
            Some(json!({ "name": "Everyday" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Everyday");

    let (status, listed) = app.json(Method::GET, "/api/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/admin/categories/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.json(Method::GET, &format!("/api/categories/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .json(Method::DELETE, &format!("/api/admin/categories/{id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .json(
            Method::PUT,
            &format!("/api/admin/categories/{id}"),
            Some(&admin),
            Some(json!({ "name": "Gone" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn slides_are_managed_by_admins_and_filtered_for_visitors() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (show_id, _) = app.seed_episode(&admin).await;

    let (status, active) = app
        .json(
            Method::POST,
            "/api/admin/slides",
            Some(&admin),
            Some(json!({ "title": "Now streaming", "show_id": show_id, "link": "/show.html?id=1", "sort_order": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{active}");
    let active_id = active["id"].as_i64().unwrap();

    let (status, _) = app
        .json(
            Method::POST,
            "/api/admin/slides",
            Some(&admin),
            Some(json!({ "title": "Coming soon", "is_active": false, "sort_order": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, public) = app.json(Method::GET, "/api/slides", None, None).await;
    assert_eq!(public.as_array().map(Vec::len), Some(1));
    assert_eq!(public[0]["title"], "Now streaming");

    let (_, all) = app.json(Method::GET, "/api/admin/slides", Some(&admin), None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
    assert_eq!(all[0]["title"], "Coming soon");

    let (status, updated) = app
        .json(
            Method::PUT,
            &format!("/api/admin/slides/{active_id}"),
            Some(&admin),
            Some(json!({ "link": null, "show_id": null, "subtitle": "Every Friday" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert!(updated["link"].is_null());
    assert!(updated["show_id"].is_null());
    assert_eq!(updated["subtitle"], "Every Friday");
    assert_eq!(updated["title"], "Now streaming");

    let req = multipart_request(
        &format!("/api/admin/slides/{active_id}/image"),
        &admin,
        "hero_image",
        "hero.jpg",
        "jpeg bytes",
        true,
    );
    let (status, with_image) = app.send(req).await;
    assert_eq!(status, StatusCode::OK, "{with_image}");
    assert!(with_image["image"].as_str().unwrap().starts_with("/uploads/slides/"));

    let (status, _) = app
        .json(Method::DELETE, &format!("/api/admin/slides/{active_id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .json(Method::DELETE, &format!("/api/admin/slides/{active_id}"), Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .json(
            Method::PUT,
            &format!("/api/admin/slides/{active_id}"),
            Some(&admin),
            Some(json!({ "title": "Gone" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn show_and_episode_images_are_attached_to_their_records() {
    let app = spawn().await;
    let admin = app.admin_token().await;
    let (show_id, episode_id) = app.seed_episode(&admin).await;

    let req = multipart_request(
        &format!("/api/admin/shows/{show_id}/images"),
        &admin,
        "banner",
        "wide.webp",
        "banner bytes",
        true,
    );
    let (status, show) = app.send(req).await;
    assert_eq!(status, StatusCode::OK, "{show}");
    assert!(show["banner"].as_str().unwrap().starts_with("/uploads/images/"));
    assert!(show["poster"].is_null());

    let req = multipart_request(
        &format!("/api/admin/episodes/{episode_id}/thumbnail"),
        &admin,
        "thumbnail",
        "thumb.png",
        "thumb bytes",
        true,
    );
    let (status, episode) = app.send(req).await;
    assert_eq!(status, StatusCode::OK, "{episode}");
    assert!(episode["thumbnail"].as_str().unwrap().starts_with("/uploads/images/"));

    let req = multipart_request("/api/admin/shows/9999/images", &admin, "poster", "p.png", "x", true);
    let (status, _) = app.send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updates_and_deletes_of_missing_rows_are_404() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    for (method, uri, body) in [
        (Method::PUT, "/api/admin/shows/9999", Some(json!({ "title": "x" }))),
        (Method::DELETE, "/api/admin/shows/9999", None),
        (Method::PUT, "/api/admin/episodes/9999", Some(json!({ "title": "x" }))),
        (Method::DELETE, "/api/admin/episodes/9999", None),
    ] {
        let (status, res) = app.json(method.clone(), uri, Some(&admin), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}: {res}");
        assert!(res["error"].is_string());
    }
}

#[tokio::test]
async fn explicit_null_clears_a_show_field_and_missing_keys_keep_it() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    let (_, category) = app
        .json(Method::POST, "/api/admin/categories", Some(&admin), Some(json!({ "name": "Drama" })))
        .await;
    let category_id = category["id"].as_i64().unwrap();

    let (_, show) = app
        .json(
            Method::POST,
            "/api/admin/shows",
            Some(&admin),
            Some(json!({ "title": "Low Tide", "description": "Coastal noir", "category_id": category_id })),
        )
        .await;
    let show_id = show["id"].as_i64().unwrap();
    assert_eq!(show["category_id"].as_i64(), Some(category_id));

    let uri = format!("/api/admin/shows/{show_id}");
    let (status, renamed) = app
        .json(Method::PUT, &uri, Some(&admin), Some(json!({ "title": "Low Tide II" })))
        .await;
    assert_eq!(status, StatusCode::OK, "{renamed}");
    assert_eq!(renamed["category_id"].as_i64(), Some(category_id));
    assert_eq!(renamed["description"], "Coastal noir");

    let (status, cleared) = app
        .json(Method::PUT, &uri, Some(&admin), Some(json!({ "category_id": null })))
        .await;
    assert_eq!(status, StatusCode::OK, "{cleared}");
    assert!(cleared["category_id"].is_null());
    assert_eq!(cleared["title"], "Low Tide II");
}

#[tokio::test]
async fn interrupted_upload_leaves_no_partial_file() {
    let app = spawn().await;
    let admin = app.admin_token().await;

    let req = multipart_request("/api/admin/upload", &admin, "poster", "cut.png", "half a file", false);
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    let images = app.state.config.upload_dir.join("images");
    let leftovers = std::fs::read_dir(&images).map(|d| d.count()).unwrap_or(0);
    assert_eq!(leftovers, 0);
}

#[tokio::test]
async fn openapi_document_lists_every_admin_route() {
    let app = spawn().await;
    let (status, doc) = app.json(Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/api/admin/shows/{id}",
        "/api/admin/shows/{id}/images",
        "/api/admin/episodes/{id}",
        "/api/admin/episodes/{id}/thumbnail",
        "/api/admin/slides",
        "/api/admin/slides/{id}",
        "/api/admin/slides/{id}/image",
        "/api/history/{episode_id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(paths["/api/history/{episode_id}"]["delete"].is_object());
}
