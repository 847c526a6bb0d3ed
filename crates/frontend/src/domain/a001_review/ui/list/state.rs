use crate::shared::list_utils::{
    apply_query, empty_rows, is_not_found, paginate, rows_per_page_options, PaginationState,
    SelectionSet, SortState,
};
use contracts::domain::a001_review::ReviewRecord;
use contracts::shared::list_response::ListPage;
use leptos::prelude::*;

const DEFAULT_PAGE_SIZE: usize = 5;

/// Состояние загрузки списка
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ReviewListState {
    /// Last successfully fetched page; a failed fetch leaves it untouched
    pub records: Vec<ReviewRecord>,
    /// Server-side total from the last successful fetch
    pub total: usize,
    pub status: LoadStatus,
    /// Blocking overlay; the user may click it away while a request is in flight
    pub overlay_open: bool,
    pub filter: String,
    pub sort: SortState,
    pub pagination: PaginationState,
    pub selection: SelectionSet,
    last_request: u64,
    account_loading: Option<bool>,
}

impl Default for ReviewListState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            status: LoadStatus::Idle,
            overlay_open: false,
            filter: String::new(),
            // no column: rows stay in server order
            sort: SortState::default(),
            pagination: PaginationState::new(DEFAULT_PAGE_SIZE),
            selection: SelectionSet::default(),
            last_request: 0,
            account_loading: None,
        }
    }
}

impl ReviewListState {
    /// Records the upstream account-loading flag. Returns true when the list
    /// must be fetched: on the first observation and on every change.
    pub fn account_loading_changed(&mut self, loading: bool) -> bool {
        if self.account_loading == Some(loading) {
            return false;
        }
        self.account_loading = Some(loading);
        true
    }

    /// Starts a fetch and returns its request id
    pub fn begin_fetch(&mut self) -> u64 {
        self.last_request += 1;
        self.status = LoadStatus::Loading;
        self.overlay_open = true;
        self.last_request
    }

    /// Applies a fetch result. Only the latest request is applied; returns
    /// whether it was.
    pub fn finish_fetch(
        &mut self,
        request: u64,
        result: Result<ListPage<ReviewRecord>, String>,
    ) -> bool {
        if request != self.last_request {
            return false;
        }
        match result {
            Ok(page) => {
                self.records = page.data;
                self.total = page.total;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e);
            }
        }
        self.overlay_open = false;
        true
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.pagination.reset_page();
    }

    pub fn request_sort(&mut self, field: &str) {
        self.sort.request(field);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn toggle_select(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox over the full current record set; records without an
    /// id are skipped
    pub fn select_all(&mut self, checked: bool) {
        let ids = self.records.iter().filter_map(ReviewRecord::row_key);
        self.selection.set_all(checked, ids);
    }

    /// Filtered and sorted records, all pages
    pub fn filtered(&self) -> Vec<ReviewRecord> {
        apply_query(&self.records, &self.filter, &self.sort)
    }

    pub fn visible_rows(&self) -> Vec<ReviewRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.pagination.page, self.pagination.page_size).to_vec()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn empty_rows(&self) -> usize {
        empty_rows(
            self.pagination.page,
            self.pagination.page_size,
            self.filtered_count(),
        )
    }

    pub fn not_found(&self) -> bool {
        is_not_found(&self.filter, self.filtered_count())
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        rows_per_page_options(self.records.len())
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<ReviewListState> {
    RwSignal::new(ReviewListState::default())
}

#[cfg(test)]
mod tests {
    use super::super::{COL_RATING, COL_REVIEWER};
    use super::*;
    use serde_json::json;

    fn review(id: i64, email: &str, rating: f64) -> ReviewRecord {
        serde_json::from_value(json!({
            "id": id,
            "rating": rating,
            "content": format!("review {}", id),
            "status": "active",
            "ReviewReplies": { "user": { "email": email } },
        }))
        .unwrap()
    }

    fn page(records: Vec<ReviewRecord>) -> ListPage<ReviewRecord> {
        let total = records.len();
        ListPage {
            data: records,
            total,
            skipped: 0,
        }
    }

    fn ids(records: &[ReviewRecord]) -> Vec<String> {
        records.iter().filter_map(ReviewRecord::row_key).collect()
    }

    fn loaded(records: Vec<ReviewRecord>) -> ReviewListState {
        let mut state = ReviewListState::default();
        let request = state.begin_fetch();
        assert!(state.finish_fetch(request, Ok(page(records))));
        state
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = ReviewListState::default();
        assert_eq!(state.status, LoadStatus::Idle);

        let request = state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.overlay_open);

        assert!(state.finish_fetch(request, Ok(page(vec![review(1, "a@x", 5.0)]))));
        assert_eq!(state.status, LoadStatus::Loaded);
        assert!(!state.overlay_open);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn test_failure_keeps_stale_records() {
        let mut state = loaded(vec![review(1, "a@x", 5.0), review(2, "b@x", 4.0)]);

        let request = state.begin_fetch();
        assert!(state.finish_fetch(request, Err("HTTP error: 500".to_string())));

        assert_eq!(ids(&state.records), vec!["1", "2"]);
        assert_eq!(state.error(), Some("HTTP error: 500"));
        assert!(!state.is_loading());
        assert!(!state.overlay_open);
    }

    #[test]
    fn test_only_latest_request_applies() {
        let mut state = ReviewListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch(second, Ok(page(vec![review(2, "b@x", 1.0)]))));
        assert!(!state.finish_fetch(first, Ok(page(vec![review(1, "a@x", 1.0)]))));
        assert_eq!(ids(&state.records), vec!["2"]);
    }

    #[test]
    fn test_account_loading_triggers_refetch_on_change_only() {
        let mut state = ReviewListState::default();
        assert!(state.account_loading_changed(false));
        assert!(!state.account_loading_changed(false));
        assert!(state.account_loading_changed(true));
        assert!(state.account_loading_changed(false));
    }

    #[test]
    fn test_filter_resets_page_and_signals_not_found() {
        let records = (1..=12)
            .map(|i| review(i, &format!("user{}@x", i), 3.0))
            .collect();
        let mut state = loaded(records);
        state.set_page(2);
        state.set_filter("USER1".to_string());
        assert_eq!(state.pagination.page, 0);
        // user1, user10, user11, user12
        assert_eq!(state.filtered_count(), 4);
        assert!(!state.not_found());

        state.set_filter("nobody".to_string());
        assert!(state.not_found());
        assert!(state.visible_rows().is_empty());
    }

    #[test]
    fn test_empty_source_is_not_not_found() {
        let state = loaded(Vec::new());
        assert!(!state.not_found());
        assert!(state.visible_rows().is_empty());
        assert!(state.empty_rows() <= state.pagination.page_size);
    }

    #[test]
    fn test_sort_and_paginate_visible_rows() {
        let mut state = loaded(vec![
            review(1, "c@x", 2.0),
            review(2, "a@x", 5.0),
            review(3, "b@x", 2.0),
            review(4, "d@x", 1.0),
        ]);
        state.request_sort(COL_RATING);
        state.set_page_size(3);
        assert_eq!(ids(&state.visible_rows()), vec!["4", "1", "3"]);

        state.request_sort(COL_RATING);
        assert_eq!(ids(&state.visible_rows()), vec!["2", "1", "3"]);

        state.set_page(1);
        assert_eq!(ids(&state.visible_rows()), vec!["4"]);
        assert_eq!(state.empty_rows(), 2);

        state.request_sort(COL_REVIEWER);
        assert!(state.sort.ascending);
    }

    #[test]
    fn test_select_all_uses_current_records() {
        let mut state = loaded(vec![
            review(1, "a@x", 1.0),
            review(2, "b@x", 1.0),
            review(3, "c@x", 1.0),
        ]);

        state.select_all(true);
        assert_eq!(state.selection.len(), 3);
        assert!(["1", "2", "3"].iter().all(|id| state.selection.contains(id)));

        state.select_all(false);
        assert!(state.selection.is_empty());

        state.toggle_select("2");
        assert!(state.selection.contains("2"));
        state.toggle_select("2");
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_records_without_id_are_not_selectable() {
        let anonymous: ReviewRecord =
            serde_json::from_value(json!({ "content": "no id" })).unwrap();
        let mut state = loaded(vec![review(1, "a@x", 1.0), anonymous]);

        state.select_all(true);
        assert_eq!(state.selection.len(), 1);
        assert!(state.selection.contains("1"));
    }

    #[test]
    fn test_default_order_is_server_order() {
        let state = loaded(vec![
            review(3, "c@x", 1.0),
            review(1, "a@x", 5.0),
            review(2, "b@x", 3.0),
        ]);
        assert!(!state.sort.is_active());
        assert_eq!(ids(&state.visible_rows()), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_response_after_dispose_is_ignored() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        let request = state.try_update(|s| s.begin_fetch()).unwrap();

        owner.cleanup();

        let applied = state.try_update(|s| s.finish_fetch(request, Ok(page(vec![]))));
        assert!(applied.is_none());
    }
}
