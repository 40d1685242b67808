//! Horizontal progress bar.

use leptos::prelude::*;

/// Clamp a percentage into `0..=100`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Filled track showing a percentage.
#[component]
pub fn ProgressBar(
    /// Fill percentage; values outside `0..=100` are clamped.
    percent: f64,
    /// Fill color (CSS color). Defaults to the primary color class.
    #[prop(optional, into)]
    color: Option<String>,
    /// Track height class.
    #[prop(default = "h-2")]
    height: &'static str,
) -> impl IntoView {
    let width = clamp_percent(percent);
    let fill_class = format!(
        "{} rounded-full transition-all {}",
        height,
        if color.is_some() { "" } else { "bg-primary-500" }
    );
    let style = match color {
        Some(c) => format!("width: {width:.0}%; background-color: {c}"),
        None => format!("width: {width:.0}%"),
    };
    let track_class = format!("w-full bg-gray-200 dark:bg-gray-700 rounded-full {}", height);

    view! {
        <div class=track_class role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=format!("{width:.0}")>
            <div class=fill_class style=style></div>
        </div>
    }
}
