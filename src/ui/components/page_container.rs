//! Page width wrapper.

use leptos::prelude::*;

/// Maximum content width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageWidth {
    #[default]
    Default,
    Narrow,
    Wide,
}

impl PageWidth {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "max-w-7xl",
            Self::Narrow => "max-w-3xl",
            Self::Wide => "max-w-[1600px]",
        }
    }
}

/// Centers page content and spaces its sections.
#[component]
pub fn PageContainer(
    /// Maximum width.
    #[prop(default = PageWidth::Default)]
    width: PageWidth,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Page sections.
    children: Children,
) -> impl IntoView {
    let classes = format!("w-full mx-auto {} space-y-6 {}", width.classes(), class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
