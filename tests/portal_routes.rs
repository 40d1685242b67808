use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use rautine_portal::AppState;
use rautine_portal::config::AppConfig;
use rautine_portal::portal::{AssignmentStatus, Portal};
use rautine_portal::server::build_router;

fn server() -> TestServer {
    let config = AppConfig::load_from_args(["rautine-portal"]).expect("default config");
    let app = build_router(AppState::new(Portal::fixtures(), config));
    TestServer::new(app).expect("test server")
}

#[tokio::test]
async fn test_every_page_renders() {
    let server = server();
    for path in [
        "/",
        "/courses",
        "/courses/1",
        "/assignments",
        "/grades",
        "/schedule",
        "/profile",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
        let body = response.text();
        assert!(body.contains("Rautine"), "GET {path} misses the shell");
        assert!(body.contains("<html lang=\"ru\""), "GET {path} misses the document");
    }
}

#[tokio::test]
async fn test_unknown_course_is_not_found() {
    let server = server();
    let response = server.get("/courses/does-not-exist").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.text();
    assert!(body.contains("Курс не найден"));
    assert!(body.contains("href=\"/courses\""));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = server();
    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Страница не найдена"));
}

#[tokio::test]
async fn test_pending_filter_keeps_only_pending() {
    let portal = Portal::fixtures();
    let server = server();
    let body = server.get("/assignments?status=pending").await.text();

    for assignment in portal.assignments() {
        let shown = body.contains(&assignment.title);
        assert_eq!(
            shown,
            assignment.status == AssignmentStatus::Pending,
            "{}",
            assignment.title
        );
    }
}

#[tokio::test]
async fn test_graded_filter_shows_grade() {
    let server = server();
    let body = server.get("/assignments?status=graded").await.text();
    assert!(body.contains("Оценка: 87/100"));
    assert!(!body.contains("data-status=\"pending\""));
}

#[tokio::test]
async fn test_unknown_status_falls_back_to_all() {
    let server = server();
    let body = server.get("/assignments?status=archived").await.text();
    assert!(body.contains("data-status=\"pending\""));
    assert!(body.contains("data-status=\"graded\""));
}

#[tokio::test]
async fn test_pages_advertise_color_scheme_hint() {
    let server = server();
    let response = server.get("/").await;
    let hint = response.header(HeaderName::from_static("accept-ch"));
    assert_eq!(hint.to_str().unwrap(), "Sec-CH-Prefers-Color-Scheme");
}

#[tokio::test]
async fn test_client_hint_selects_dark_theme() {
    let server = server();
    let body = server
        .get("/grades")
        .add_header(
            HeaderName::from_static("sec-ch-prefers-color-scheme"),
            HeaderValue::from_static("dark"),
        )
        .await
        .text();
    assert!(body.contains("<html lang=\"ru\" class=\"dark\""));
}

#[tokio::test]
async fn test_healthz() {
    let server = server();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_static_assets_served() {
    let server = server();
    let response = server.get("/static/shell.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/shell/viewport"));
}
