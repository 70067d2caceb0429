//! Pagination math.
//!
//! [`paginate`] slices an already-filtered sequence into one page and
//! records the metadata a pagination control needs. Every input, however
//! degenerate, produces a valid (possibly empty) [`Page`].

use serde::Serialize;

use crate::window::{compute_page_window, PageLink};

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page (at most `page_size`).
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Number of pages; `0` when there are no items.
    pub total_pages: usize,
    /// Requested page clamped into `[1, max(1, total_pages)]`.
    pub current_page: usize,
    /// Page size the page was cut with.
    pub page_size: usize,
    /// Whether the requested page lay past the last page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub out_of_range: bool,
}

impl<T> Page<T> {
    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the requested page lay past the last page.
    pub fn is_out_of_range(&self) -> bool {
        self.out_of_range
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    /// Returns the 1-based, inclusive item range shown on this page, for
    /// "showing 11-15 of 23" captions. `None` when the page is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    /// Computes the page window for this page.
    pub fn window(&self, max_visible: usize) -> Vec<PageLink> {
        compute_page_window(self.current_page, self.total_pages, max_visible)
    }

    /// Maps the items of this page, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
            out_of_range: self.out_of_range,
        }
    }
}

impl<T: Clone> Page<&T> {
    /// Clones the borrowed items into an owned page.
    pub fn cloned(self) -> Page<T> {
        self.map(Clone::clone)
    }
}

/// Number of pages needed for `total_items` at `page_size` per page.
///
/// Zero items, or a zero page size, give zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
///
/// Stepping before the first page or past the last one is a no-op rather
/// than an error.
///
/// ```
/// use flightdesk_query::clamp_page;
///
/// assert_eq!(clamp_page(0, 5), 1);
/// assert_eq!(clamp_page(7, 5), 5);
/// assert_eq!(clamp_page(3, 0), 1);
/// ```
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.min(total_pages.max(1)).max(1)
}

/// Cuts page `page` (1-based) out of `matched`.
///
/// Page `0` is read as page 1. A page past the end yields no items. A zero
/// page size yields no items and no pages.
///
/// # Example
///
/// ```
/// use flightdesk_query::paginate;
///
/// let matched: Vec<u32> = (0..23).collect();
/// let page = paginate(matched, 3, 5);
/// assert_eq!(page.items, vec![10, 11, 12, 13, 14]);
/// assert_eq!(page.total_pages, 5);
/// ```
pub fn paginate<T>(matched: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total_items = matched.len();
    let total_pages = total_pages(total_items, page_size);
    let requested = page.max(1);
    let offset = (requested - 1).saturating_mul(page_size);

    let items: Vec<T> = if page_size == 0 || offset >= total_items {
        Vec::new()
    } else {
        matched.into_iter().skip(offset).take(page_size).collect()
    };

    Page {
        items,
        total_items,
        total_pages,
        current_page: clamp_page(requested, total_pages),
        page_size,
        out_of_range: requested > total_pages.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(4, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn middle_page() {
        let page = paginate(numbers(23), 3, 5);
        assert_eq!(page.items, vec![10, 11, 12, 13, 14]);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.item_range(), Some((11, 15)));
        assert!(page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn last_partial_page() {
        let page = paginate(numbers(23), 5, 5);
        assert_eq!(page.items, vec![20, 21, 22]);
        assert_eq!(page.item_range(), Some((21, 23)));
        assert!(!page.has_next());
    }

    #[test]
    fn far_out_of_range_page_is_empty() {
        let page = paginate(numbers(12), 999, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert!(page.is_out_of_range());
        assert_eq!(page.item_range(), None);
    }

    #[test]
    fn page_zero_reads_as_first() {
        let page = paginate(numbers(12), 0, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.current_page, 1);
        assert!(!page.is_out_of_range());
        assert!(!page.has_prev());
    }

    #[test]
    fn empty_collection() {
        let page = paginate(Vec::<u8>::new(), 1, 10);
        assert!(page.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(!page.is_out_of_range());
        assert!(!page.has_next());
        assert!(!page.has_prev());
        assert!(page.window(5).is_empty());
    }

    #[test]
    fn zero_page_size() {
        let page = paginate(numbers(3), 1, 0);
        assert!(page.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = paginate(numbers(7), 2, 3).map(|n| n * 10);
        assert_eq!(page.items, vec![30, 40, 50]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn serialization_skips_in_range_flag() {
        let json = serde_json::to_string(&paginate(numbers(2), 1, 5)).unwrap();
        assert!(json.contains("\"total_items\":2"));
        assert!(!json.contains("out_of_range"));

        let json = serde_json::to_string(&paginate(numbers(2), 9, 5)).unwrap();
        assert!(json.contains("\"out_of_range\":true"));
    }
}
