//! Per-browser navigation shell state and its store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use super::breakpoint::{BreakpointSignal, BreakpointSubscription};
use super::theme::Theme;

/// Default idle time before a shell is evicted (30 minutes).
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Sidebar, breakpoint and route state of one browser.
#[derive(Debug)]
pub struct ShellState {
    sidebar_open: bool,
    breakpoint: BreakpointSignal,
    route: Option<String>,
    last_seen: Instant,
}

impl ShellState {
    #[must_use]
    pub fn new(breakpoint: BreakpointSignal) -> Self {
        Self {
            sidebar_open: false,
            breakpoint,
            route: None,
            last_seen: Instant::now(),
        }
    }

    /// Flip the mobile sidebar. Has no effect on a measured desktop
    /// viewport, where the sidebar is always shown. Before the browser has
    /// reported its width the toggle always applies.
    pub fn toggle_sidebar(&mut self) -> bool {
        if !(self.breakpoint.is_measured() && self.is_desktop()) {
            self.sidebar_open = !self.sidebar_open;
        }
        self.sidebar_open
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Record a visit to `route`. A route change closes the sidebar.
    ///
    /// Returns `true` if the route changed.
    pub fn navigate(&mut self, route: &str) -> bool {
        if self.route.as_deref() == Some(route) {
            return false;
        }
        self.route = Some(route.to_string());
        self.close_sidebar();
        true
    }

    /// Apply a viewport width. Returns `true` if the breakpoint flipped.
    pub fn resize(&mut self, width: u32) -> bool {
        let flipped = self.breakpoint.update(width);
        if self.is_desktop() {
            self.sidebar_open = false;
        }
        flipped
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.breakpoint.is_desktop()
    }

    #[must_use]
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the sidebar is on screen.
    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        self.is_desktop() || self.sidebar_open
    }

    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    #[must_use]
    pub fn breakpoint(&self) -> &BreakpointSignal {
        &self.breakpoint
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }

    /// Render-ready copy of the state.
    #[must_use]
    pub fn snapshot(&self, theme: Theme) -> ShellSnapshot {
        ShellSnapshot {
            route: self.route.clone().unwrap_or_else(|| "/".to_string()),
            return_to: self.route.clone().unwrap_or_else(|| "/".to_string()),
            sidebar_open: self.sidebar_open,
            desktop: self.is_desktop(),
            theme,
            breakpoint_px: self.breakpoint.threshold(),
        }
    }
}

/// Immutable view of the shell handed to the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSnapshot {
    /// Path used for nav highlighting.
    pub route: String,
    /// Path and query the shell forms redirect back to.
    pub return_to: String,
    pub sidebar_open: bool,
    pub desktop: bool,
    pub theme: Theme,
    pub breakpoint_px: u32,
}

impl ShellSnapshot {
    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        self.desktop || self.sidebar_open
    }
}

impl Default for ShellSnapshot {
    fn default() -> Self {
        ShellState::new(BreakpointSignal::default()).snapshot(Theme::default())
    }
}

/// Shared handle to one browser's shell.
pub type ShellHandle = Arc<Mutex<ShellState>>;

/// Thread-safe store of shell states keyed by the shell cookie.
#[derive(Debug, Clone)]
pub struct ShellStore {
    shells: Arc<RwLock<HashMap<Uuid, ShellHandle>>>,
    breakpoint_px: u32,
}

impl ShellStore {
    #[must_use]
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            shells: Arc::new(RwLock::new(HashMap::new())),
            breakpoint_px,
        }
    }

    /// Fetch an existing shell and mark it active.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<ShellHandle> {
        let shells = self.shells.read().unwrap_or_else(PoisonError::into_inner);
        let handle = shells.get(id).cloned()?;
        lock(&handle).touch();
        Some(handle)
    }

    /// Create a fresh shell.
    pub fn create(&self) -> (Uuid, ShellHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(ShellState::new(BreakpointSignal::new(
            self.breakpoint_px,
        ))));
        self.shells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::clone(&handle));
        debug!(name: "shell.created", shell_id = %id, "Shell created");
        (id, handle)
    }

    /// Fetch `id` if it is known, otherwise create a new shell.
    ///
    /// The returned flag is `true` when a new shell was created.
    pub fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, ShellHandle, bool) {
        if let Some(id) = id {
            if let Some(handle) = self.get(&id) {
                return (id, handle, false);
            }
        }
        let (id, handle) = self.create();
        (id, handle, true)
    }

    pub fn remove(&self, id: &Uuid) -> Option<ShellHandle> {
        self.shells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Drop shells idle for longer than `max_idle`. Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut shells = self.shells.write().unwrap_or_else(PoisonError::into_inner);
        let before = shells.len();
        shells.retain(|_, handle| lock(handle).idle_for() <= max_idle);
        let evicted = before - shells.len();
        if evicted > 0 {
            info!(name: "shell.evicted", count = evicted, "Idle shells evicted");
        }
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shells.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ShellStore {
    fn default() -> Self {
        Self::new(super::breakpoint::DEFAULT_BREAKPOINT_PX)
    }
}

/// Lock a shell, recovering the state if a previous holder panicked.
pub fn lock(handle: &ShellHandle) -> std::sync::MutexGuard<'_, ShellState> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Log breakpoint flips of a shell until the shell is dropped.
pub fn watch_breakpoint(id: Uuid, mut subscription: BreakpointSubscription) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(desktop) = subscription.changed().await {
            info!(
                name: "shell.breakpoint.changed",
                shell_id = %id,
                desktop,
                "Viewport crossed the breakpoint"
            );
        }
        debug!(name: "shell.watch.closed", shell_id = %id, "Breakpoint watcher stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile_shell() -> ShellState {
        ShellState::new(BreakpointSignal::with_width(1024, 390))
    }

    #[test]
    fn test_toggle_sidebar_on_mobile() {
        let mut shell = mobile_shell();
        assert!(!shell.sidebar_visible());

        assert!(shell.toggle_sidebar());
        assert!(shell.sidebar_visible());

        assert!(!shell.toggle_sidebar());
        assert!(!shell.sidebar_visible());
    }

    #[test]
    fn test_toggle_sidebar_is_noop_on_desktop() {
        let mut shell = ShellState::new(BreakpointSignal::with_width(1024, 1440));
        assert!(!shell.toggle_sidebar());
        assert!(!shell.is_sidebar_open());
        assert!(shell.sidebar_visible());
    }

    #[test]
    fn test_unmeasured_shell_toggles_sidebar() {
        let mut shell = ShellState::new(BreakpointSignal::new(1024));
        assert!(shell.is_desktop());
        assert!(shell.toggle_sidebar());
        assert!(!shell.toggle_sidebar());

        shell.toggle_sidebar();
        assert!(!shell.resize(1440));
        assert!(!shell.is_sidebar_open());
        assert!(!shell.toggle_sidebar());
    }

    #[test]
    fn test_route_change_closes_sidebar() {
        let mut shell = mobile_shell();
        assert!(shell.navigate("/"));
        shell.toggle_sidebar();

        assert!(!shell.navigate("/"));
        assert!(shell.is_sidebar_open());

        assert!(shell.navigate("/courses"));
        assert!(!shell.is_sidebar_open());
        assert_eq!(shell.route(), Some("/courses"));
    }

    #[test]
    fn test_resize_to_desktop_clears_mobile_sidebar() {
        let mut shell = mobile_shell();
        shell.toggle_sidebar();

        assert!(shell.resize(1280));
        assert!(shell.is_desktop());
        assert!(!shell.is_sidebar_open());

        assert!(shell.resize(600));
        assert!(!shell.sidebar_visible());
    }

    #[test]
    fn test_snapshot() {
        let mut shell = mobile_shell();
        shell.navigate("/grades");
        shell.toggle_sidebar();

        let snap = shell.snapshot(Theme::Dark);
        assert_eq!(snap.route, "/grades");
        assert_eq!(snap.return_to, "/grades");
        assert!(snap.sidebar_open);
        assert!(!snap.desktop);
        assert!(snap.sidebar_visible());
        assert_eq!(snap.theme, Theme::Dark);
        assert_eq!(snap.breakpoint_px, 1024);
    }

    #[test]
    fn test_store_get_or_create() {
        let store = ShellStore::new(1024);
        assert!(store.is_empty());

        let (id, _, created) = store.get_or_create(None);
        assert!(created);
        assert_eq!(store.len(), 1);

        let (same, _, created) = store.get_or_create(Some(id));
        assert!(!created);
        assert_eq!(same, id);

        let (_, _, created) = store.get_or_create(Some(Uuid::new_v4()));
        assert!(created);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_shares_state() {
        let store = ShellStore::new(1024);
        let (id, handle) = store.create();
        lock(&handle).navigate("/profile");

        let again = store.get(&id).unwrap();
        assert_eq!(lock(&again).route(), Some("/profile"));
    }

    #[test]
    fn test_evict_idle() {
        let store = ShellStore::new(1024);
        store.create();
        store.create();

        assert_eq!(store.evict_idle(Duration::from_secs(60)), 0);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(store.evict_idle(Duration::from_millis(5)), 2);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_watcher_stops_when_shell_evicted() {
        let store = ShellStore::new(1024);
        let (id, handle) = store.create();
        let watcher = watch_breakpoint(id, lock(&handle).breakpoint().subscribe());

        lock(&handle).resize(500);
        store.remove(&id);
        drop(handle);

        tokio::time::timeout(Duration::from_secs(1), watcher)
            .await
            .expect("watcher should stop")
            .unwrap();
    }
}
