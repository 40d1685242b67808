//! Headline number tile.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};

/// Background gradient of a stat tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatGradient {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
}

impl StatGradient {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Blue => "from-primary-500 to-primary-600",
            Self::Green => "from-green-500 to-green-600",
            Self::Purple => "from-purple-500 to-purple-600",
            Self::Orange => "from-orange-500 to-orange-600",
        }
    }
}

/// A single statistic with an optional icon.
///
/// The `subtle` form drops the gradient for a plain card.
#[component]
pub fn StatCard(
    /// Displayed value.
    #[prop(into)]
    value: String,
    /// Caption under the value.
    label: &'static str,
    /// Leading icon.
    #[prop(optional)]
    icon: Option<IconKind>,
    /// Gradient for the filled form.
    #[prop(default = StatGradient::Blue)]
    gradient: StatGradient,
    /// Render as a plain card.
    #[prop(default = false)]
    subtle: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    if subtle {
        let classes = format!("card rounded-2xl bg-white dark:bg-gray-900 shadow-lg p-5 {}", class);
        view! {
            <div class=classes>
                {icon.map(|kind| view! {
                    <div class="mb-3 text-primary-500"><Icon kind=kind size="h-8 w-8" /></div>
                })}
                <div class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-1">{value}</div>
                <div class="text-[13px] font-medium text-gray-500 dark:text-gray-400 tracking-wide uppercase">
                    {label}
                </div>
            </div>
        }
        .into_any()
    } else {
        let classes = format!(
            "rounded-apple-lg shadow-apple-lg p-6 text-white bg-gradient-to-br {} {}",
            gradient.classes(),
            class
        );
        view! {
            <div class=classes>
                {icon.map(|kind| view! {
                    <div class="mb-3 opacity-90"><Icon kind=kind size="h-8 w-8" /></div>
                })}
                <div class="text-3xl font-semibold mb-1 leading-none">{value}</div>
                <div class="text-[13px] text-white/80 font-medium">{label}</div>
            </div>
        }
        .into_any()
    }
}
