use crate::dashboards::d400_weekly_bookings::api::fetch_booking_chart;
use contracts::domain::a002_booking::BookingRecord;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Страницы панели
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Reviews,
    Bookings,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Reviews, Page::Bookings];

    pub fn key(self) -> &'static str {
        match self {
            Page::Reviews => "review",
            Page::Bookings => "booking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Reviews => "Review",
            Page::Bookings => "Payment method",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Reviews => "reviews",
            Page::Bookings => "payments",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Общее состояние приложения, раздаётся через context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// True while provider/account data is loading; the review list refetches
    /// whenever it changes
    pub account_loading: RwSignal<bool>,
    pub booking_chart: RwSignal<Vec<BookingRecord>>,
    pub booking_error: RwSignal<Option<String>>,
    pub active_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            account_loading: RwSignal::new(false),
            booking_chart: RwSignal::new(Vec::new()),
            booking_error: RwSignal::new(None),
            active_page: RwSignal::new(Page::Reviews),
        }
    }

    pub fn open_page(&self, page: Page) {
        self.active_page.set(page);
    }

    /// Loads the account-level data shared by the pages (the booking chart)
    pub fn load_provider_data(&self) {
        let this = *self;
        this.account_loading.set(true);
        spawn_local(async move {
            match fetch_booking_chart().await {
                Ok(page) => {
                    log::debug!("Loaded {} bookings (total {})", page.data.len(), page.total);
                    if page.skipped > 0 {
                        log::warn!("Skipped {} unreadable booking records", page.skipped);
                    }
                    this.booking_chart.set(page.data);
                    this.booking_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load bookings: {}", e);
                    this.booking_error.set(Some(e.to_string()));
                }
            }
            this.account_loading.set(false);
        });
    }

    /// Keeps `?page=` in the address bar in sync with the active page
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active_page.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_search(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

fn search_for_page(page: Page) -> String {
    let query = serde_qs::to_string(&HashMap::from([("page", page.key())])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("unknown"), None);
    }

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?page=booking"), Some(Page::Bookings));
        assert_eq!(page_from_search("page=review&x=1"), Some(Page::Reviews));
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?page=nope"), None);
    }

    #[test]
    fn test_search_for_page() {
        assert_eq!(search_for_page(Page::Bookings), "?page=booking");
    }
}
