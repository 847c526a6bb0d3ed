use leptos::prelude::*;

/// Заголовок страницы: название, подзаголовок и блок действий справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Кнопки и поля справа от заголовка
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {subtitle.map(|s| view! { <span class="header__subtitle">{s}</span> })}
            </div>
            <div class="header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
