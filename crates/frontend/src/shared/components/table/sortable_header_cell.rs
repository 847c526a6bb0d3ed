//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Rating"
//!     sort_field="rating"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort.field.clone()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.sort.ascending))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.request_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Ячейка заголовка: индикатор сортировки (▲▼) и клик для смены сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Выравнивание заголовка (left/center/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            style=format!("text-align: {}; cursor: pointer; user-select: none;", align)
            on:click=move |_| on_sort.run(sort_field_for_click.clone())
        >
            {label}
            <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                {move || {
                    get_sort_indicator(
                        &current_sort_field.get(),
                        &sort_field_for_indicator,
                        sort_ascending.get(),
                    )
                }}
            </span>
        </th>
    }
}
