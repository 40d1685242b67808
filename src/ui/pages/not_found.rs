//! 404 page.

use leptos::prelude::*;

use crate::ui::components::{Card, CardPadding, Icon, IconKind, PageContainer, PageWidth};

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageContainer width=PageWidth::Narrow>
            <Card padding=CardPadding::Lg class="text-center">
                <p class="text-6xl font-bold text-primary-600 mb-4">"404"</p>
                <h1 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-2">"Страница не найдена"</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-6">"Такой страницы нет в портале."</p>
                <a href="/" class="inline-flex items-center text-primary-600 hover:text-primary-700 font-medium">
                    <Icon kind=IconKind::ArrowLeft class="mr-2" />
                    "На главную"
                </a>
            </Card>
        </PageContainer>
    }
}
