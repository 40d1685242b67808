//! Button component with variants and sizes.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Outline button.
    Outline,
    /// Subtle ghost button.
    Ghost,
    /// Destructive action button.
    Danger,
    /// Low-emphasis filled button.
    Subtle,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary-500 text-white hover:bg-primary-600",
            Self::Secondary => {
                "bg-gray-100 text-gray-800 hover:bg-gray-200 dark:bg-gray-800 dark:text-gray-100 dark:hover:bg-gray-700"
            }
            Self::Outline => {
                "border border-gray-300 dark:border-white/20 bg-white dark:bg-gray-900 text-gray-800 dark:text-gray-100 hover:bg-gray-50 dark:hover:bg-gray-800"
            }
            Self::Ghost => {
                "bg-transparent text-gray-700 dark:text-gray-300 hover:bg-gray-100/70 dark:hover:bg-white/10"
            }
            Self::Danger => "bg-accent-red text-white hover:bg-red-600",
            Self::Subtle => {
                "bg-gray-50 text-gray-800 hover:bg-gray-100 dark:bg-gray-800/50 dark:hover:bg-gray-700 dark:text-gray-100"
            }
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "text-[13px] px-3 py-1.5 rounded-apple-sm",
            Self::Md => "text-[15px] px-4 py-2.5 rounded-apple",
            Self::Lg => "text-[16px] px-5 py-3 rounded-apple-lg",
        }
    }
}

/// Button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary left_icon=IconKind::Upload>
///         "Сдать работу"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Stretch to the container width.
    #[prop(default = false)]
    block: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Icon shown before the label.
    #[prop(optional)]
    left_icon: Option<IconKind>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "btn relative select-none inline-flex items-center gap-2 font-medium \
                        transition-all active:scale-95 focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-primary-500/50 \
                        disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!(
        "{} {} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        if block { "w-full justify-center" } else { "" },
        class
    );

    view! {
        <button type=button_type class=classes disabled=disabled>
            {left_icon.map(|kind| view! {
                <span class="shrink-0 flex items-center" aria-hidden="true">
                    <Icon kind=kind size="h-[18px] w-[18px]" />
                </span>
            })}
            <span class="inline-flex items-center">{children()}</span>
        </button>
    }
}
