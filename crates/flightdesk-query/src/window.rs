//! Page windows for pagination controls.
//!
//! A page window is the short list of page links a pagination control shows:
//! the first page, the last page, a few pages around the current one, and
//! ellipsis markers for the gaps.

use serde::Serialize;

use crate::page::clamp_page;

/// Number of page links shown before the window starts collapsing.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// One entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    /// A link to a 1-based page number.
    Page(usize),
    /// A gap marker.
    Ellipsis,
}

impl PageLink {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn page(self) -> Option<usize> {
        match self {
            PageLink::Page(n) => Some(n),
            PageLink::Ellipsis => None,
        }
    }

    /// Returns `true` for an ellipsis marker.
    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageLink::Ellipsis)
    }
}

impl std::fmt::Display for PageLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{n}"),
            PageLink::Ellipsis => write!(f, "…"),
        }
    }
}

/// Computes the page links to render for `current_page` out of
/// `total_pages`.
///
/// Collections that fit in `max_visible` pages list every page. Longer ones
/// always show page 1 and the last page, plus:
///
/// - near the start (`current <= 3`): pages 2-4 and a trailing ellipsis;
/// - near the end (`current >= total - 2`): an ellipsis and the three pages
///   before the last;
/// - otherwise: an ellipsis, the current page with one neighbour on each
///   side, and another ellipsis.
///
/// With the default `max_visible` of 5 the window never exceeds 7 entries.
/// `current_page` is clamped into range first.
///
/// # Example
///
/// ```
/// use flightdesk_query::{compute_page_window, PageLink::{Ellipsis, Page}};
///
/// assert_eq!(
///     compute_page_window(5, 10, 5),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn compute_page_window(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageLink> {
    if total_pages <= max_visible {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let current = clamp_page(current_page, total_pages);
    let mut links = vec![PageLink::Page(1)];

    if current <= 3 {
        links.extend((2..=4.min(total_pages)).map(PageLink::Page));
        if total_pages > 4 {
            links.push(PageLink::Ellipsis);
        }
    } else if current >= total_pages.saturating_sub(2) {
        links.push(PageLink::Ellipsis);
        links.extend(
            (total_pages.saturating_sub(3)..total_pages)
                .filter(|&p| p > 1)
                .map(PageLink::Page),
        );
    } else {
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
    }

    if total_pages > 1 && links.last() != Some(&PageLink::Page(total_pages)) {
        links.push(PageLink::Page(total_pages));
    }

    links
}
