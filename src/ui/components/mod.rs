//! Reusable UI primitives.
//!
//! Pure rendering components, parameterized by style variants and rendered
//! via Leptos SSR. None of them hold state.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`]: Card container with padding presets
//! - [`StatCard`]: Headline statistic tile
//! - [`PageContainer`]: Page width wrapper
//! - [`Badge`]: Status badge/tag
//! - [`ProgressBar`]: Percentage track
//! - [`Icon`]: Inline SVG icons

mod badge;
mod button;
mod card;
mod icons;
mod page_container;
mod progress;
mod stat_card;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardPadding};
pub use icons::{Icon, IconKind};
pub use page_container::{PageContainer, PageWidth};
pub use progress::{ProgressBar, clamp_percent};
pub use stat_card::{StatCard, StatGradient};
