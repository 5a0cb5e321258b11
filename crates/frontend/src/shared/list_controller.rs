//! Reactive wrapper around `ListSyncState`.
//!
//! Holds the whole collection in a signal; filtering and paging are derived
//! in memory. Overlapping reloads are not cancelled, the last response to
//! arrive wins.

use crate::shared::api_utils::CollectionClient;
use crate::shared::config::app_config;
use contracts::domain::common::ListRecord;
use contracts::shared::list_sync::ListSyncState;
use leptos::prelude::*;

pub struct ListController<R: ListRecord + Send + Sync> {
    pub state: RwSignal<ListSyncState<R>>,
    client: StoredValue<CollectionClient>,
}

impl<R: ListRecord + Send + Sync> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListRecord + Send + Sync> Copy for ListController<R> {}

impl<R: ListRecord + Send + Sync> ListController<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListSyncState::new(app_config().ui.rows_per_page)),
            client: StoredValue::new(CollectionClient::for_entity(R::entity())),
        }
    }

    pub fn client(&self) -> CollectionClient {
        self.client.get_value()
    }

    /// Fetches the collection and replaces the snapshot on success
    pub fn reload(&self) {
        let state = self.state;
        let client = self.client();
        wasm_bindgen_futures::spawn_local(async move {
            log::debug!("Reloading {} from {}", R::list_name(), client.base());
            let result = client.list::<R>().await;
            if let Err(e) = &result {
                log::error!("Failed to load {} ({}): {}", R::list_name(), e.kind(), e);
            }
            state.update(|s| {
                if s.apply_reload(result) {
                    log::debug!("{}: {} records", R::list_name(), s.snapshot().len());
                }
            });
        });
    }

    /// Loads once per page instance
    pub fn load_if_needed(&self) {
        if !self.state.with_untracked(|s| s.is_loaded()) {
            self.reload();
        }
    }

    pub fn set_filter_text(&self, text: String) {
        self.state.update(|s| s.set_filter_text(text));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_rows_per_page(&self, rows: usize) {
        self.state.update(|s| s.set_rows_per_page(rows));
    }

    pub fn filter_text(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter_text().to_string()))
    }

    pub fn page_rows(&self) -> Signal<Vec<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.derive_page()))
    }

    pub fn page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page()))
    }

    pub fn page_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.page_count()))
    }

    pub fn filtered_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filtered_count()))
    }

    pub fn rows_per_page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.rows_per_page()))
    }

    /// Сообщение об ошибке последней загрузки
    pub fn load_error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.last_error().map(|e| e.to_string())))
    }
}

impl<R: ListRecord + Send + Sync> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}
