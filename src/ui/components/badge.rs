//! Badge component for status indicators and tags.

use leptos::prelude::*;

use crate::portal::{AssignmentStatus, EventKind};

/// Badge color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral gray badge.
    #[default]
    Neutral,
    /// Blue informational badge.
    Info,
    /// Green success badge.
    Success,
    /// Orange attention badge.
    Warning,
    /// Red badge.
    Danger,
    /// Purple badge.
    Purple,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Neutral => "bg-gray-100 text-gray-700 border-gray-200",
            Self::Info => "bg-blue-100 text-blue-700 border-blue-200",
            Self::Success => "bg-green-100 text-green-700 border-green-200",
            Self::Warning => "bg-orange-100 text-orange-700 border-orange-200",
            Self::Danger => "bg-red-100 text-red-700 border-red-200",
            Self::Purple => "bg-purple-100 text-purple-700 border-purple-200",
        }
    }
}

impl From<AssignmentStatus> for BadgeVariant {
    fn from(status: AssignmentStatus) -> Self {
        match status {
            AssignmentStatus::Pending => Self::Warning,
            AssignmentStatus::Submitted => Self::Info,
            AssignmentStatus::Graded => Self::Success,
        }
    }
}

impl From<EventKind> for BadgeVariant {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Lecture => Self::Info,
            EventKind::Lab => Self::Purple,
            EventKind::Tutorial => Self::Success,
            EventKind::Exam => Self::Danger,
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=AssignmentStatus::Pending.into()>"В ожидании"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Neutral)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-full border px-2 py-1 text-[11px] \
                        font-semibold whitespace-nowrap";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(BadgeVariant::from(AssignmentStatus::Pending), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::from(AssignmentStatus::Graded), BadgeVariant::Success);
        assert_eq!(BadgeVariant::from(EventKind::Exam), BadgeVariant::Danger);
    }
}
