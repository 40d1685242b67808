use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::AppState;
use crate::portal::stats::StatusFilter;
use crate::shell::{
    self, CookieThemeStore, ShellHandle, ShellSnapshot, ShellStore, Theme, ThemeStore, lock,
};
use crate::ui::pages::Page;
use crate::ui::render_document;

/// Client hint carrying the browser's `prefers-color-scheme`.
const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.assets.static_dir.clone();

    Router::new()
        // Pages
        .route("/", get(dashboard))
        .route("/courses", get(courses))
        .route("/courses/{id}", get(course_detail))
        .route("/assignments", get(assignments))
        .route("/grades", get(grades))
        .route("/schedule", get(schedule))
        .route("/profile", get(profile))
        // Shell controls
        .route("/shell/sidebar", post(shell_toggle_sidebar))
        .route("/shell/sidebar/close", post(shell_close_sidebar))
        .route("/shell/theme", post(shell_toggle_theme))
        .route("/shell/viewport", post(shell_viewport))
        .route("/healthz", get(healthz))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided state.
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let idle_timeout = Duration::from_secs(state.config.shell.idle_timeout_secs);
    spawn_shell_eviction(state.shells.clone(), idle_timeout);

    let addr = state.config.bind_address();
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Periodically drop shells that have been idle longer than `idle_timeout`.
fn spawn_shell_eviction(shells: ShellStore, idle_timeout: Duration) {
    let period = (idle_timeout / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            shells.evict_idle(idle_timeout);
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Shell session helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve the caller's shell from the session cookie, creating one (and its
/// breakpoint watcher) when the cookie is missing or stale.
fn shell_session(state: &AppState, jar: CookieJar) -> (CookieJar, ShellHandle) {
    let key = &state.config.shell.session_cookie;
    let known = jar.get(key).and_then(|c| Uuid::parse_str(c.value()).ok());
    let (id, handle, created) = state.shells.get_or_create(known);
    if !created {
        return (jar, handle);
    }

    let subscription = lock(&handle).breakpoint().subscribe();
    shell::watch_breakpoint(id, subscription);

    let cookie = Cookie::build((key.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), handle)
}

fn system_theme(headers: &HeaderMap) -> Option<Theme> {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .and_then(Theme::from_client_hint)
}

/// Only local absolute paths are followed; anything else goes home.
fn safe_return_to(target: Option<&str>) -> String {
    match target {
        Some(t)
            if t.starts_with('/')
                && !t.starts_with("//")
                && !t.contains('\\')
                && !t.chars().any(char::is_control) =>
        {
            t.to_string()
        }
        _ => "/".to_string(),
    }
}

fn render_page(
    state: &AppState,
    jar: CookieJar,
    headers: &HeaderMap,
    page: Page,
    status: StatusCode,
) -> Response {
    let (jar, handle) = shell_session(state, jar);
    let stored = CookieThemeStore::new(jar.clone(), state.config.shell.theme_cookie.clone()).load();
    let theme = Theme::resolve(stored, system_theme(headers));

    let snapshot = {
        let mut shell = lock(&handle);
        shell.navigate(&page.route());
        ShellSnapshot {
            return_to: page.location(),
            ..shell.snapshot(theme)
        }
    };

    let html = render_document(Arc::clone(&state.portal), snapshot, page);
    (
        status,
        [
            ("accept-ch", "Sec-CH-Prefers-Color-Scheme"),
            ("vary", "Sec-CH-Prefers-Color-Scheme"),
        ],
        jar,
        Html(html),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn dashboard(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::Dashboard, StatusCode::OK)
}

async fn courses(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::Courses, StatusCode::OK)
}

/// GET /courses/{id} - 404 with the not-found state for unknown ids.
async fn course_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let status = if state.portal.course(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    render_page(&state, jar, &headers, Page::CourseDetail(id), status)
}

#[derive(Debug, Deserialize)]
struct AssignmentsQuery {
    #[serde(default)]
    status: Option<String>,
}

/// GET /assignments?status= - unknown values show every assignment.
async fn assignments(
    State(state): State<AppState>,
    Query(query): Query<AssignmentsQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let filter = query
        .status
        .as_deref()
        .and_then(|s| s.parse::<StatusFilter>().ok())
        .unwrap_or_default();
    render_page(&state, jar, &headers, Page::Assignments(filter), StatusCode::OK)
}

async fn grades(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::Grades, StatusCode::OK)
}

async fn schedule(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::Schedule, StatusCode::OK)
}

async fn profile(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::Profile, StatusCode::OK)
}

async fn not_found(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Response {
    render_page(&state, jar, &headers, Page::NotFound, StatusCode::NOT_FOUND)
}

async fn healthz() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// Shell Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Form body shared by the shell controls.
#[derive(Debug, Default, Deserialize)]
struct ReturnForm {
    #[serde(default)]
    return_to: Option<String>,
}

/// POST /shell/sidebar - flip the mobile sidebar.
async fn shell_toggle_sidebar(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ReturnForm>,
) -> impl IntoResponse {
    let (jar, handle) = shell_session(&state, jar);
    let open = lock(&handle).toggle_sidebar();
    debug!(name: "shell.sidebar.toggled", open, "Sidebar toggled");
    (jar, Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// POST /shell/sidebar/close - overlay click.
async fn shell_close_sidebar(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ReturnForm>,
) -> impl IntoResponse {
    let (jar, handle) = shell_session(&state, jar);
    lock(&handle).close_sidebar();
    (jar, Redirect::to(&safe_return_to(form.return_to.as_deref())))
}

/// POST /shell/theme - flip and persist the theme cookie.
async fn shell_toggle_theme(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<ReturnForm>,
) -> impl IntoResponse {
    let mut store = CookieThemeStore::new(jar, state.config.shell.theme_cookie.clone());
    let theme = shell::toggle_theme(&mut store, system_theme(&headers));
    debug!(name: "shell.theme.toggled", theme = %theme, "Theme toggled");
    (
        store.into_jar(),
        Redirect::to(&safe_return_to(form.return_to.as_deref())),
    )
}

#[derive(Debug, Deserialize)]
struct ViewportForm {
    width: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewportResponse {
    /// Layout mode after applying the width.
    pub desktop: bool,
    /// Whether the width crossed the breakpoint.
    pub changed: bool,
}

/// POST /shell/viewport - width reported by `static/shell.js`.
async fn shell_viewport(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ViewportForm>,
) -> impl IntoResponse {
    let (jar, handle) = shell_session(&state, jar);
    let response = {
        let mut shell = lock(&handle);
        let changed = shell.resize(form.width);
        ViewportResponse {
            desktop: shell.is_desktop(),
            changed,
        }
    };
    (jar, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_to() {
        assert_eq!(safe_return_to(Some("/grades")), "/grades");
        assert_eq!(
            safe_return_to(Some("/assignments?status=pending")),
            "/assignments?status=pending"
        );
        assert_eq!(safe_return_to(Some("//evil.example")), "/");
        assert_eq!(safe_return_to(Some("https://evil.example")), "/");
        assert_eq!(safe_return_to(Some("/\\evil")), "/");
        assert_eq!(safe_return_to(Some("/a\r\nb")), "/");
        assert_eq!(safe_return_to(None), "/");
    }

    #[test]
    fn test_system_theme_from_hint() {
        let mut headers = HeaderMap::new();
        assert_eq!(system_theme(&headers), None);
        headers.insert(PREFERS_COLOR_SCHEME, "\"dark\"".parse().unwrap());
        assert_eq!(system_theme(&headers), Some(Theme::Dark));
    }
}
