//! Light/dark theme preference and its persistence.

use std::fmt;
use std::str::FromStr;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Visual theme of the portal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted value, either `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Effective theme: stored preference, then system preference, then light.
    #[must_use]
    pub fn resolve(stored: Option<Self>, system: Option<Self>) -> Self {
        stored.or(system).unwrap_or_default()
    }

    /// Parse a `Sec-CH-Prefers-Color-Scheme` header value.
    ///
    /// The hint is a structured-header string, so it usually arrives quoted.
    #[must_use]
    pub fn from_client_hint(value: &str) -> Option<Self> {
        value.trim().trim_matches('"').parse().ok()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a value that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Storage for the single persisted theme flag.
///
/// Values that do not parse as a [`Theme`] are treated as absent.
pub trait ThemeStore {
    /// Read the stored preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Persist a preference.
    fn save(&mut self, theme: Theme);
}

/// In-memory store, used where no cookie jar is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new(theme: Option<Theme>) -> Self {
        Self {
            value: theme.map(|t| t.as_str().to_string()),
        }
    }

    /// Raw persisted string.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.value.as_deref().and_then(|v| v.parse().ok())
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_string());
    }
}

/// Cookie-backed store; the cookie is the browser-side persisted flag.
#[derive(Debug, Clone)]
pub struct CookieThemeStore {
    jar: CookieJar,
    key: String,
}

impl CookieThemeStore {
    pub fn new(jar: CookieJar, key: impl Into<String>) -> Self {
        Self {
            jar,
            key: key.into(),
        }
    }

    /// Hand the jar back so it can be returned in the response.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl ThemeStore for CookieThemeStore {
    fn load(&self) -> Option<Theme> {
        self.jar.get(&self.key).and_then(|c| c.value().parse().ok())
    }

    fn save(&mut self, theme: Theme) {
        let cookie = Cookie::build((self.key.clone(), theme.as_str()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent()
            .build();
        self.jar = std::mem::replace(&mut self.jar, CookieJar::new()).add(cookie);
    }
}

/// Flip the effective theme and persist the result.
pub fn toggle_theme(store: &mut impl ThemeStore, system: Option<Theme>) -> Theme {
    let next = Theme::resolve(store.load(), system).toggled();
    store.save(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(Theme::resolve(Some(Theme::Light), Some(Theme::Dark)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(Theme::Dark)), Theme::Dark);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_client_hint_parsing() {
        assert_eq!(Theme::from_client_hint("\"dark\""), Some(Theme::Dark));
        assert_eq!(Theme::from_client_hint("light"), Some(Theme::Light));
        assert_eq!(Theme::from_client_hint("sepia"), None);
    }

    #[test]
    fn test_toggle_twice_restores_memory_store() {
        for original in [Theme::Light, Theme::Dark] {
            let mut store = MemoryThemeStore::new(Some(original));
            toggle_theme(&mut store, None);
            assert_eq!(store.load(), Some(original.toggled()));
            toggle_theme(&mut store, None);
            assert_eq!(store.load(), Some(original));
            assert_eq!(store.raw(), Some(original.as_str()));
        }
    }

    #[test]
    fn test_toggle_starts_from_system_preference() {
        let mut store = MemoryThemeStore::default();
        assert_eq!(toggle_theme(&mut store, Some(Theme::Dark)), Theme::Light);
        assert_eq!(store.raw(), Some("light"));
    }

    #[test]
    fn test_garbage_value_is_ignored() {
        let jar = CookieJar::new().add(Cookie::new("theme", "purple"));
        let store = CookieThemeStore::new(jar, "theme");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_toggle_twice_restores_cookie_store() {
        let jar = CookieJar::new().add(Cookie::new("theme", "dark"));
        let mut store = CookieThemeStore::new(jar, "theme");

        assert_eq!(toggle_theme(&mut store, None), Theme::Light);
        assert_eq!(toggle_theme(&mut store, None), Theme::Dark);

        let jar = store.into_jar();
        assert_eq!(jar.get("theme").map(|c| c.value().to_string()), Some("dark".to_string()));
    }
}
