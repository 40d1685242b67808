//! Card container.

use leptos::prelude::*;

/// Inner padding of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    /// No padding; content manages its own spacing.
    #[default]
    None,
    Sm,
    Md,
    Lg,
}

impl CardPadding {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-4",
            Self::Md => "p-5",
            Self::Lg => "p-6",
        }
    }
}

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card padding=CardPadding::Lg hover=true>
///         <h2>"Мои курсы"</h2>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Inner padding.
    #[prop(default = CardPadding::None)]
    padding: CardPadding,
    /// Lift the card on hover.
    #[prop(default = false)]
    hover: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "card rounded-2xl bg-white dark:bg-gray-900 shadow-lg {} {} {}",
        padding.classes(),
        if hover { "card-hover hover:shadow-xl transition-shadow" } else { "" },
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
