//! Query state for one list view.
//!
//! [`QueryState`] is the mutable half of a list query: what the user typed,
//! which filter values they picked, how the list is sorted and which page is
//! showing. It is created with defaults when a view opens, changed by user
//! actions, and reset on demand.

use std::collections::BTreeMap;

use crate::filter::ALL;
use crate::ordering::OrderBy;
use crate::page::clamp_page;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search text, filter values, sort and pagination position of a list view.
///
/// Changing the search text or a filter sends the view back to page 1, since
/// the old page number refers to a different result set.
///
/// # Example
///
/// ```
/// use flightdesk_query::QueryState;
///
/// let mut state = QueryState::new(5).with_page(3);
/// state.set_filter("status", "active");
/// assert_eq!(state.page, 1);
///
/// state.next_page(4);
/// state.next_page(4);
/// assert_eq!(state.page, 3);
///
/// state.reset();
/// assert!(state.filters.is_empty());
/// assert_eq!(state.page_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Free-text search, matched against the predicate set's search fields.
    pub search_text: String,
    /// Filter values keyed by field name.
    pub filters: BTreeMap<String, String>,
    /// Sort clauses, primary first.
    pub sort: Vec<OrderBy>,
    /// Requested page, 1-based.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Creates a fresh state on page 1 with no search, filters or sort.
    pub fn new(page_size: usize) -> Self {
        QueryState {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort: Vec::new(),
            page: 1,
            page_size,
        }
    }

    /// Sets the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets a filter value.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Appends a sort clause.
    pub fn with_sort(mut self, order: OrderBy) -> Self {
        self.sort.push(order);
        self
    }

    /// Sets the requested page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Replaces the search text and returns to page 1.
    pub fn search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Sets a filter value and returns to page 1.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(field.into(), value.into());
        self.page = 1;
    }

    /// Removes a filter and returns to page 1.
    pub fn clear_filter(&mut self, field: &str) {
        self.filters.remove(field);
        self.page = 1;
    }

    /// Replaces the sort clauses. The page is kept.
    pub fn set_sort(&mut self, sort: Vec<OrderBy>) {
        self.sort = sort;
    }

    /// Jumps to `page`, clamped into `[1, max(1, total_pages)]`.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    /// Moves one page forward; a no-op on the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_add(1), total_pages);
    }

    /// Moves one page back; a no-op on the first page.
    pub fn prev_page(&mut self, total_pages: usize) {
        self.go_to(self.page.saturating_sub(1), total_pages);
    }

    /// Clears search, filters and sort and returns to page 1. The page size
    /// is kept.
    pub fn reset(&mut self) {
        *self = QueryState::new(self.page_size);
    }

    /// Returns filter entries whose value is neither empty nor the `all`
    /// sentinel.
    pub fn set_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, v)| is_set(v))
            .map(|(k, v)| (k.as_str(), v.trim()))
    }

    /// Returns `true` when no search text and no filter value is set.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.trim().is_empty() && self.set_filters().next().is_none()
    }
}

/// A filter value is set unless it is blank or the `all` sentinel.
pub(crate) fn is_set(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case(ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = QueryState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.is_unfiltered());
    }

    #[test]
    fn search_and_filters_reset_page() {
        let mut state = QueryState::new(10).with_page(4);
        state.search("drag");
        assert_eq!(state.page, 1);

        state.page = 3;
        state.clear_filter("status");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn sort_keeps_page() {
        let mut state = QueryState::new(10).with_page(2);
        state.set_sort(vec![OrderBy::desc("hours")]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn navigation_is_boundary_safe() {
        let mut state = QueryState::new(10);
        state.prev_page(3);
        assert_eq!(state.page, 1);

        state.go_to(3, 3);
        state.next_page(3);
        assert_eq!(state.page, 3);

        state.go_to(50, 3);
        assert_eq!(state.page, 3);

        state.next_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_filters_skips_sentinels() {
        let state = QueryState::new(10)
            .with_filter("status", "all")
            .with_filter("model", "")
            .with_filter("city", "Lyon");
        let set: Vec<_> = state.set_filters().collect();
        assert_eq!(set, vec![("city", "Lyon")]);
        assert!(!state.is_unfiltered());
    }

    #[test]
    fn reset_keeps_page_size() {
        let mut state = QueryState::new(25)
            .with_search("x")
            .with_filter("a", "b")
            .with_sort(OrderBy::asc("a"))
            .with_page(9);
        state.reset();
        assert_eq!(state, QueryState::new(25));
    }
}
