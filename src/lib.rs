//! Rautine student portal
//!
//! A server-rendered student dashboard: courses, assignments, grades,
//! weekly schedule and profile, served from a read-only dataset.
//!
//! # Architecture
//!
//! - **Server**: Axum router, cookie-keyed shell state, static assets
//! - **Portal**: Dataset model, fixtures and derived statistics
//! - **Shell**: Sidebar, theme and breakpoint state per browser
//! - **UI**: Leptos SSR components, layout and pages
//!
//! # Modules
//!
//! - [`config`]: Layered configuration
//! - [`portal`]: Data model and statistics
//! - [`shell`]: Navigation shell state
//! - [`server`]: HTTP routes and handlers
//! - [`ui`]: Rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::assigning_clones)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod portal;
pub mod server;
pub mod shell;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::portal::Portal;
use crate::shell::ShellStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only portal dataset.
    pub portal: Arc<Portal>,
    /// Shell state per browser.
    pub shells: ShellStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(portal: Portal, config: AppConfig) -> Self {
        Self {
            portal: Arc::new(portal),
            shells: ShellStore::new(config.shell.breakpoint_px),
            config: Arc::new(config),
        }
    }
}
