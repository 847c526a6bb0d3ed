pub mod state;

use self::state::create_state;
use crate::domain::a001_review::api::fetch_reviews;
use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::components::{PageHeader, PaginationControls, TableEmptyRows, TableNoData};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ignore_case, highlight_matches, SearchInput, Searchable, SortKey, Sortable,
};
use contracts::domain::a001_review::ReviewRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

pub const COL_REVIEWER: &str = "reviewer";
pub const COL_CONTENT: &str = "content";
pub const COL_RATING: &str = "rating";
pub const COL_REPLY: &str = "reply";
pub const COL_STATUS: &str = "status";

/// Checkbox + five data columns + actions
const COLUMN_COUNT: u32 = 7;

impl Searchable for ReviewRecord {
    /// Фильтр работает только по имени автора
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.reviewer_name(), filter)
    }
}

impl Sortable for ReviewRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (review_sort_key(self, field), review_sort_key(other, field)) {
            (Some(a), Some(b)) => a.compare(&b),
            _ => Ordering::Equal,
        }
    }
}

fn review_sort_key(review: &ReviewRecord, field: &str) -> Option<SortKey> {
    let key = match field {
        COL_REVIEWER => SortKey::Text(review.reviewer_name().into_owned()),
        COL_CONTENT => SortKey::Text(review.content_text().into_owned()),
        COL_RATING => SortKey::Number(review.rating_value()),
        COL_REPLY => SortKey::Number(if review.has_reply() { 1.0 } else { 0.0 }),
        COL_STATUS => SortKey::Text(review.status_text().into_owned()),
        _ => return None,
    };
    Some(key)
}

fn status_color(status: &str) -> BadgeColor {
    match status.to_lowercase().as_str() {
        "active" | "approved" | "published" => BadgeColor::Success,
        "pending" => BadgeColor::Warning,
        "rejected" | "banned" | "hidden" => BadgeColor::Danger,
        _ => BadgeColor::Informative,
    }
}

/// Review list page.
///
/// `account_loading` comes from the app context; every change of it reloads the
/// list. Filter, sort and paging work on the last fetched page only.
#[component]
pub fn ReviewList(#[prop(into)] account_loading: Signal<bool>) -> impl IntoView {
    let state = create_state();

    let load = move || {
        let Some(request) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        spawn_local(async move {
            let result = fetch_reviews().await.map_err(|e| e.to_string());
            match &result {
                Ok(page) => {
                    log::debug!("Loaded {} reviews (total {})", page.data.len(), page.total);
                    if page.skipped > 0 {
                        log::warn!("Skipped {} unreadable review records", page.skipped);
                    }
                }
                Err(e) => log::error!("Failed to load reviews: {}", e),
            }
            // try_update is a no-op once the view is gone
            match state.try_update(|s| s.finish_fetch(request, result)) {
                None => log::debug!("Review list disposed before request {} finished", request),
                Some(false) => log::debug!("Dropped stale review response {}", request),
                Some(true) => {}
            }
        });
    };

    Effect::new(move |_| {
        let loading = account_loading.get();
        if state
            .try_update(|s| s.account_loading_changed(loading))
            .unwrap_or(false)
        {
            load();
        }
    });

    let sort_field = Signal::derive(move || state.with(|s| s.sort.field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort.ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.request_sort(&field)));
    let filter = Signal::derive(move || state.with(|s| s.filter.clone()));

    view! {
        <div class="page review-list">
            <Show when=move || state.with(|s| s.overlay_open)>
                <div class="backdrop" on:click=move |_| state.update(|s| s.dismiss_overlay())>
                    <Spinner />
                </div>
            </Show>

            <PageHeader title="Review">
                <button
                    class="button button--secondary"
                    on:click=move |_| load()
                    disabled=move || state.with(|s| s.is_loading())
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="button button--secondary" on:click=move |_| load()>"Retry"</button>
                </div>
            })}

            <div class="card">
                <div class="table-toolbar">
                    {move || {
                        let selected = state.with(|s| s.selection.len());
                        if selected > 0 {
                            view! { <span class="table-toolbar__selected">{format!("{} selected", selected)}</span> }.into_any()
                        } else {
                            view! {
                                <SearchInput
                                    value=filter
                                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(v)))
                                    placeholder="Search reviewer..."
                                />
                            }.into_any()
                        }
                    }}
                    <span class="table-toolbar__total">
                        {move || format!("{} reviews", state.with(|s| s.total))}
                    </span>
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <TableHeaderCheckbox
                                    selected_count=Signal::derive(move || state.with(|s| s.selection.len()))
                                    row_count=Signal::derive(move || state.with(|s| s.records.len()))
                                    on_change=Callback::new(move |checked: bool| state.update(|s| s.select_all(checked)))
                                />
                                <SortableHeaderCell label="Reviewer" sort_field=COL_REVIEWER current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Content" sort_field=COL_CONTENT current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Rating" sort_field=COL_RATING current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Reply" sort_field=COL_REPLY align="center" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Status" sort_field=COL_STATUS current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                state
                                    .with(|s| s.visible_rows())
                                    .into_iter()
                                    .map(|row| review_row(row, &query, state))
                                    .collect_view()
                            }}

                            <TableEmptyRows
                                count=Signal::derive(move || state.with(|s| s.empty_rows()))
                                col_span=COLUMN_COUNT
                            />

                            <Show when=move || state.with(|s| s.not_found())>
                                <TableNoData query=filter col_span=COLUMN_COUNT />
                            </Show>
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.pagination.page))
                    total_count=Signal::derive(move || state.with(|s| s.filtered_count()))
                    page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                    page_size_options=Signal::derive(move || state.with(|s| s.page_size_options()))
                    on_page_change=Callback::new(move |page: usize| state.update(|s| s.set_page(page)))
                    on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
                />
            </div>
        </div>
    }
}

fn review_row(
    row: ReviewRecord,
    query: &str,
    state: RwSignal<state::ReviewListState>,
) -> impl IntoView {
    // records without an id cannot be selected
    let key = row.row_key();
    let selectable = key.is_some();
    let id = key.unwrap_or_default();
    let id_for_checked = id.clone();
    let id_for_toggle = id.clone();
    let status = row.status_text().into_owned();
    let avatar = row.avatar_url().to_string();

    view! {
        <tr
            class="table__row"
            class:table__row--selected=move || {
                selectable && state.with(|s| s.selection.contains(&id))
            }
        >
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    disabled={!selectable}
                    prop:checked=move || {
                        selectable && state.with(|s| s.selection.contains(&id_for_checked))
                    }
                    on:change=move |_| {
                        if selectable {
                            state.update(|s| s.toggle_select(&id_for_toggle))
                        }
                    }
                />
            </td>
            <td class="table__cell">
                <div class="reviewer">
                    <img class="reviewer__avatar" src=avatar alt="" />
                    {highlight_matches(&row.reviewer_name(), query)}
                </div>
            </td>
            <td class="table__cell">{row.content_text().into_owned()}</td>
            <td class="table__cell">{row.rating_value()}</td>
            <td class="table__cell" style="text-align: center;">
                {if row.has_reply() { "Yes" } else { "No" }}
            </td>
            <td class="table__cell">
                <Badge appearance=BadgeAppearance::Tint color=status_color(&status)>
                    {status.clone()}
                </Badge>
            </td>
            <td class="table__cell"></td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};
    use serde_json::json;

    fn review(value: serde_json::Value) -> ReviewRecord {
        serde_json::from_value(value).unwrap()
    }

    fn keys(reviews: &[ReviewRecord]) -> Vec<String> {
        reviews.iter().filter_map(ReviewRecord::row_key).collect()
    }

    #[test]
    fn test_filter_on_reviewer_name() {
        let reviews = vec![
            review(json!({ "id": 1, "ReviewReplies": { "user": { "email": "Anna@tours.io" } } })),
            review(json!({ "id": 2, "content": "anna was great" })),
            review(json!({ "id": 3, "ReviewReplies": { "user": { "email": "boris@tours.io" } } })),
        ];
        let filtered = filter_list(reviews, "anna");
        assert_eq!(filtered.len(), 1);
        assert_eq!(keys(&filtered), vec!["1"]);
    }

    #[test]
    fn test_missing_fields_sort_first() {
        let mut reviews = vec![
            review(json!({ "id": 1, "rating": 3 })),
            review(json!({ "id": 2 })),
            review(json!({ "id": 3, "content": "b" })),
            review(json!({ "id": 4, "content": "a" })),
        ];
        sort_list(&mut reviews, COL_RATING, true);
        assert_eq!(keys(&reviews), vec!["2", "3", "4", "1"]);

        sort_list(&mut reviews, COL_CONTENT, true);
        assert_eq!(keys(&reviews), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_reply_column_sorts_unreplied_first() {
        let mut reviews = vec![
            review(json!({ "id": 1, "ReviewReplies": { "content": "thanks" } })),
            review(json!({ "id": 2 })),
        ];
        sort_list(&mut reviews, COL_REPLY, true);
        assert_eq!(keys(&reviews), vec!["2", "1"]);
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        let mut reviews = vec![review(json!({ "id": 2 })), review(json!({ "id": 1 }))];
        sort_list(&mut reviews, "", true);
        assert_eq!(keys(&reviews), vec!["2", "1"]);
    }

    #[test]
    fn test_filter_with_odd_records() {
        let reviews = vec![
            review(json!({ "ReviewReplies": { "user": { "email": 42 } } })),
            review(json!({ "id": 7, "ReviewReplies": { "user": { "email": "x42@tours.io" } } })),
            review(json!({ "id": 8, "content": ["not", "text"] })),
        ];
        let filtered = filter_list(reviews, "42");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].row_key(), None);
        assert_eq!(keys(&filtered), vec!["7"]);
    }
}
