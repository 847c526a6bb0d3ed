use leptos::prelude::*;

/// Пустые строки, которые держат высоту таблицы на последней странице
#[component]
pub fn TableEmptyRows(
    #[prop(into)] count: Signal<usize>,
    /// Высота одной строки, px
    #[prop(optional, default = 77)]
    height: u32,
    col_span: u32,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <tr class="table__row table__row--empty" style=move || format!("height: {}px;", height * count.get() as u32)>
                <td class="table__cell" colspan=col_span></td>
            </tr>
        </Show>
    }
}

/// Строка "ничего не найдено" для непустого фильтра без совпадений
#[component]
pub fn TableNoData(#[prop(into)] query: Signal<String>, col_span: u32) -> impl IntoView {
    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--no-data" colspan=col_span>
                <div class="no-data">
                    <h6 class="no-data__title">"Not found"</h6>
                    <p class="no-data__text">
                        "No results found for "
                        <strong>{move || format!("\"{}\"", query.get())}</strong>
                        ". Try checking for typos or using complete words."
                    </p>
                </div>
            </td>
        </tr>
    }
}
