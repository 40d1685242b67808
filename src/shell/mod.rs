//! Navigation/theme shell.
//!
//! The shell tracks three pieces of UI state for each browser:
//!
//! - whether the mobile sidebar is open (closed again on every route change),
//! - the light/dark theme, persisted in a cookie and defaulting to the
//!   browser's reported color-scheme preference,
//! - whether the viewport is above the desktop breakpoint.
//!
//! State lives in explicit [`ShellState`] objects held by a [`ShellStore`];
//! pages only ever see a [`ShellSnapshot`].

mod breakpoint;
mod state;
mod theme;

pub use breakpoint::{BreakpointSignal, BreakpointSubscription, DEFAULT_BREAKPOINT_PX};
pub use state::{
    DEFAULT_IDLE_TIMEOUT, ShellHandle, ShellSnapshot, ShellState, ShellStore, lock,
    watch_breakpoint,
};
pub use theme::{CookieThemeStore, MemoryThemeStore, Theme, ThemeStore, UnknownTheme, toggle_theme};
