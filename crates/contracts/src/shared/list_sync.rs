//! Client-side list synchronization: snapshot → filtered view → page.
//!
//! Both derived views are recomputed from `(snapshot, filter_text, page,
//! rows_per_page)` only; nothing else mutates them.

use crate::shared::api_error::ApiError;

/// Record that can be matched by the list text filter
pub trait Filterable {
    /// Значение поля, по которому работает фильтр (наименование)
    fn filter_key(&self) -> &str;
}

/// Order-preserving subsequence of `snapshot` whose filter key contains
/// `text`, ignoring case. Empty text keeps everything.
pub fn derive_filtered<R: Filterable + Clone>(snapshot: &[R], text: &str) -> Vec<R> {
    if text.is_empty() {
        return snapshot.to_vec();
    }
    let needle = text.to_lowercase();
    snapshot
        .iter()
        .filter(|item| item.filter_key().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// `filtered[page*size .. page*size + size]`, clipped to bounds.
pub fn derive_page<R: Clone>(filtered: &[R], page: usize, rows_per_page: usize) -> Vec<R> {
    let start = page.saturating_mul(rows_per_page).min(filtered.len());
    let end = start.saturating_add(rows_per_page).min(filtered.len());
    filtered[start..end].to_vec()
}

/// Number of pages needed for `len` rows (0 for an empty list)
pub fn page_count(len: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    len.div_ceil(rows_per_page)
}

#[derive(Debug, Clone)]
pub struct ListSyncState<R> {
    snapshot: Vec<R>,
    filtered: Vec<R>,
    filter_text: String,
    page: usize,
    rows_per_page: usize,
    is_loaded: bool,
    last_error: Option<ApiError>,
}

impl<R: Filterable + Clone> ListSyncState<R> {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            snapshot: Vec::new(),
            filtered: Vec::new(),
            filter_text: String::new(),
            page: 0,
            rows_per_page: rows_per_page.max(1),
            is_loaded: false,
            last_error: None,
        }
    }

    pub fn snapshot(&self) -> &[R] {
        &self.snapshot
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Applies the outcome of a list fetch.
    ///
    /// On success the snapshot is replaced and the filtered view recomputed
    /// with the current filter text. On failure the previous snapshot stays
    /// and the error is kept for the page to show. Returns `true` if the
    /// snapshot was replaced.
    pub fn apply_reload(&mut self, result: Result<Vec<R>, ApiError>) -> bool {
        match result {
            Ok(items) => {
                self.snapshot = items;
                self.filtered = derive_filtered(&self.snapshot, &self.filter_text);
                self.is_loaded = true;
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e);
                false
            }
        }
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.filtered = derive_filtered(&self.snapshot, &self.filter_text);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Rows per page is a positive integer; 0 is clamped to 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
    }

    pub fn derive_page(&self) -> Vec<R> {
        derive_page(&self.filtered, self.page, self.rows_per_page)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.rows_per_page)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
    }

    impl Filterable for Row {
        fn filter_key(&self) -> &str {
            &self.name
        }
    }

    fn rows(names: &[&str]) -> Vec<Row> {
        names
            .iter()
            .map(|n| Row {
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_filter_example() {
        let snapshot = rows(&["Central", "Norte"]);
        assert_eq!(derive_filtered(&snapshot, "cent"), rows(&["Central"]));
    }

    #[test]
    fn test_filter_empty_text_keeps_all() {
        let snapshot = rows(&["b", "a", "c"]);
        assert_eq!(derive_filtered(&snapshot, ""), snapshot);
    }

    #[test]
    fn test_filter_preserves_order_and_ignores_case() {
        let snapshot = rows(&["Sur ALMACEN", "norte", "Almacen Central", "almacenito"]);
        let filtered = derive_filtered(&snapshot, "ALMA");
        assert_eq!(
            filtered,
            rows(&["Sur ALMACEN", "Almacen Central", "almacenito"])
        );
    }

    #[test]
    fn test_filter_idempotent() {
        let snapshot = rows(&["Central", "Centro", "Norte", "Sur"]);
        for text in ["", "cen", "NOR", "x", "r"] {
            let once = derive_filtered(&snapshot, text);
            let twice = derive_filtered(&once, text);
            assert_eq!(once, twice, "text {:?}", text);
        }
    }

    #[test]
    fn test_page_example() {
        let filtered = rows(&["a", "b", "c", "d", "e", "f", "g"]);
        let page = derive_page(&filtered, 1, 5);
        assert_eq!(page, rows(&["f", "g"]));
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let filtered = rows(&["a", "b", "c"]);
        assert!(derive_page(&filtered, 7, 5).is_empty());
        assert!(derive_page(&filtered, usize::MAX, usize::MAX).is_empty());
        assert!(derive_page::<Row>(&[], 0, 5).is_empty());
    }

    #[test]
    fn test_page_matches_slice_for_all_positions() {
        let filtered = rows(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]);
        for size in 1..=12 {
            for page in 0..15 {
                let got = derive_page(&filtered, page, size);
                assert!(got.len() <= size);
                let start = (page * size).min(filtered.len());
                let end = (page * size + size).min(filtered.len());
                assert_eq!(got, filtered[start..end].to_vec());
            }
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(7, 0), 0);
    }

    #[test]
    fn test_reload_replaces_snapshot_and_keeps_filter() {
        let mut state = ListSyncState::new(5);
        state.set_filter_text("nor");
        assert!(state.apply_reload(Ok(rows(&["Central", "Norte", "Noroeste"]))));
        assert!(state.is_loaded());
        assert_eq!(state.filtered(), rows(&["Norte", "Noroeste"]).as_slice());
    }

    #[test]
    fn test_reload_failure_keeps_snapshot() {
        let mut state = ListSyncState::new(5);
        state.apply_reload(Ok(rows(&["Central"])));
        assert!(!state.apply_reload(Err(ApiError::Http { status: 503 })));
        assert_eq!(state.snapshot(), rows(&["Central"]).as_slice());
        assert_eq!(state.last_error(), Some(&ApiError::Http { status: 503 }));

        state.apply_reload(Ok(rows(&["Central", "Norte"])));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_reload_idempotent_on_unchanged_collection() {
        let backing = rows(&["Central", "Norte", "Sur"]);
        let mut state = ListSyncState::new(5);
        state.apply_reload(Ok(backing.clone()));
        let first = state.snapshot().to_vec();
        state.apply_reload(Ok(backing));
        assert_eq!(state.snapshot(), first.as_slice());
    }

    #[test]
    fn test_state_page_derivation() {
        let mut state = ListSyncState::new(5);
        state.apply_reload(Ok(rows(&["a1", "a2", "a3", "a4", "a5", "a6", "a7", "b1"])));
        state.set_filter_text("A");
        state.set_page(1);
        assert_eq!(state.derive_page(), rows(&["a6", "a7"]));
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.filtered_count(), 7);

        state.set_rows_per_page(0);
        assert_eq!(state.rows_per_page(), 1);
        assert_eq!(state.derive_page(), rows(&["a2"]));
    }
}
