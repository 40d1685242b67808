use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use rautine_portal::AppState;
use rautine_portal::config::AppConfig;
use rautine_portal::portal::Portal;
use rautine_portal::server::{ViewportResponse, build_router};
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig::load_from_args(["rautine-portal"]).expect("default config");
    build_router(AppState::new(Portal::fixtures(), config))
}

fn get(path: &str, cookies: &[String]) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookies.join("; "));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(path: &str, form: &str, cookies: &[String]) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if !cookies.is_empty() {
        builder = builder.header(header::COOKIE, cookies.join("; "));
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` pair set by the response, if any.
fn set_cookie(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Open a shell and return its session cookie.
async fn open_shell(app: &Router) -> String {
    let response = send(app, get("/", &[])).await;
    set_cookie(&response, "portal_shell").expect("session cookie")
}

#[tokio::test]
async fn test_theme_toggle_twice_restores_preference() {
    let app = app();

    let first = send(&app, post_form("/shell/theme", "return_to=%2Fgrades", &[])).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&first), "/grades");
    let dark = set_cookie(&first, "theme").expect("theme cookie");
    assert_eq!(dark, "theme=dark");

    let second = send(&app, post_form("/shell/theme", "return_to=%2Fgrades", &[dark])).await;
    let light = set_cookie(&second, "theme").expect("theme cookie");
    assert_eq!(light, "theme=light");

    let page = body_text(send(&app, get("/grades", &[light])).await).await;
    assert!(page.contains("<html lang=\"ru\" class=\"light\""));
}

#[tokio::test]
async fn test_stored_theme_wins_over_client_hint() {
    let app = app();
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "theme=light")
        .header("sec-ch-prefers-color-scheme", "\"dark\"")
        .body(Body::empty())
        .unwrap();
    let page = body_text(send(&app, request).await).await;
    assert!(page.contains("class=\"light\""));
}

#[tokio::test]
async fn test_theme_toggle_rejects_foreign_return_to() {
    let app = app();
    let response = send(
        &app,
        post_form("/shell/theme", "return_to=%2F%2Fevil.example", &[]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = send(&app, post_form("/shell/theme", "", &[])).await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_viewport_reports_breakpoint_crossings() {
    let app = app();
    let session = open_shell(&app).await;

    let wide = send(&app, post_form("/shell/viewport", "width=1440", &[session.clone()])).await;
    assert_eq!(wide.status(), StatusCode::OK);
    let body: ViewportResponse = serde_json::from_str(&body_text(wide).await).unwrap();
    assert_eq!(body, ViewportResponse { desktop: true, changed: false });

    let narrow = send(&app, post_form("/shell/viewport", "width=390", &[session.clone()])).await;
    let body: ViewportResponse = serde_json::from_str(&body_text(narrow).await).unwrap();
    assert_eq!(body, ViewportResponse { desktop: false, changed: true });

    let edge = send(&app, post_form("/shell/viewport", "width=1024", &[session])).await;
    let body: ViewportResponse = serde_json::from_str(&body_text(edge).await).unwrap();
    assert_eq!(body, ViewportResponse { desktop: true, changed: true });
}

#[tokio::test]
async fn test_viewport_rejects_bad_width() {
    let app = app();
    let response = send(&app, post_form("/shell/viewport", "width=wide", &[])).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_mobile_sidebar_opens_and_closes_on_navigation() {
    let app = app();
    let session = open_shell(&app).await;
    let cookies = [session];

    send(&app, post_form("/shell/viewport", "width=390", &cookies)).await;
    send(&app, get("/grades", &cookies)).await;

    let toggled = send(&app, post_form("/shell/sidebar", "return_to=%2Fgrades", &cookies)).await;
    assert_eq!(toggled.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&toggled), "/grades");

    let open = body_text(send(&app, get("/grades", &cookies)).await).await;
    assert!(open.contains("/shell/sidebar/close"));
    assert!(open.contains("aria-expanded=\"true\""));

    let moved = body_text(send(&app, get("/courses", &cookies)).await).await;
    assert!(!moved.contains("/shell/sidebar/close"));
    assert!(moved.contains("aria-expanded=\"false\""));
}

#[tokio::test]
async fn test_overlay_closes_sidebar() {
    let app = app();
    let session = open_shell(&app).await;
    let cookies = [session];

    send(&app, post_form("/shell/viewport", "width=600", &cookies)).await;
    send(&app, post_form("/shell/sidebar", "return_to=%2F", &cookies)).await;
    let closed = send(&app, post_form("/shell/sidebar/close", "return_to=%2F", &cookies)).await;
    assert_eq!(closed.status(), StatusCode::SEE_OTHER);

    let page = body_text(send(&app, get("/", &cookies)).await).await;
    assert!(!page.contains("/shell/sidebar/close"));
}

#[tokio::test]
async fn test_desktop_ignores_sidebar_toggle() {
    let app = app();
    let session = open_shell(&app).await;
    let cookies = [session];

    send(&app, post_form("/shell/viewport", "width=1440", &cookies)).await;
    send(&app, post_form("/shell/sidebar", "return_to=%2F", &cookies)).await;
    let page = body_text(send(&app, get("/", &cookies)).await).await;
    assert!(page.contains("aria-expanded=\"false\""));
}

#[tokio::test]
async fn test_sidebar_works_before_viewport_is_reported() {
    let app = app();
    let response = send(&app, get("/", &[])).await;
    let cookies = [set_cookie(&response, "portal_shell").expect("session cookie")];
    let first = body_text(response).await;
    assert!(first.contains("lg:shadow-md hidden lg:block"));

    send(&app, post_form("/shell/sidebar", "return_to=%2F", &cookies)).await;
    let open = body_text(send(&app, get("/", &cookies)).await).await;
    assert!(open.contains("lg:shadow-md block"));
    assert!(open.contains("/shell/sidebar/close"));

    send(&app, post_form("/shell/sidebar", "return_to=%2F", &cookies)).await;
    let closed = body_text(send(&app, get("/", &cookies)).await).await;
    assert!(closed.contains("lg:shadow-md hidden lg:block"));
}

#[tokio::test]
async fn test_filtered_page_keeps_query_across_shell_controls() {
    let app = app();
    let session = open_shell(&app).await;
    let cookies = [session];

    let page = body_text(send(&app, get("/assignments?status=pending", &cookies)).await).await;
    assert!(page.contains("name=\"return_to\" value=\"/assignments?status=pending\""));
    assert!(!page.contains("value=\"/assignments\""));

    let toggled = send(
        &app,
        post_form(
            "/shell/sidebar",
            "return_to=%2Fassignments%3Fstatus%3Dpending",
            &cookies,
        ),
    )
    .await;
    assert_eq!(location(&toggled), "/assignments?status=pending");

    let themed = send(
        &app,
        post_form(
            "/shell/theme",
            "return_to=%2Fassignments%3Fstatus%3Dpending",
            &cookies,
        ),
    )
    .await;
    assert_eq!(location(&themed), "/assignments?status=pending");
}

#[tokio::test]
async fn test_stale_session_cookie_is_replaced() {
    let app = app();
    let response = send(&app, get("/", &["portal_shell=not-a-uuid".to_string()])).await;
    let cookie = set_cookie(&response, "portal_shell").expect("fresh session cookie");
    assert_ne!(cookie, "portal_shell=not-a-uuid");

    let known = send(&app, get("/", &[cookie])).await;
    assert!(set_cookie(&known, "portal_shell").is_none());
}
