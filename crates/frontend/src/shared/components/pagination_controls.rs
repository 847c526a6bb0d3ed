use crate::shared::icons::icon;
use crate::shared::list_utils::total_pages;
use leptos::prelude::*;

/// "1–5 of 12"; an empty list reads "0–0 of 0"
pub fn page_range_label(page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0–0 of 0".to_string();
    }
    let from = page.saturating_mul(page_size).saturating_add(1).min(total_count);
    let to = page
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(total_count);
    format!("{}–{} of {}", from, to, total_count)
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Available page size options
    #[prop(into)]
    page_size_options: Signal<Vec<usize>>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let total = move || total_pages(total_count.get(), page_size.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-label">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {move || page_size_options.get().into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || page_range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let last = total();
                    if last > 0 {
                        on_page_change.run(last - 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
