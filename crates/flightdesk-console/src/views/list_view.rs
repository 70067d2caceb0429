//! List view: one page of a filtered collection plus pagination controls.

use flightdesk_query::{Page, PageLink, DEFAULT_MAX_VISIBLE};
use serde::Serialize;

use super::Message;

/// Pagination metadata of a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// 1-based item range on this page, for "showing 11-15 of 23".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing: Option<(usize, usize)>,
    /// Page links for the pagination bar.
    pub window: Vec<PageLink>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub out_of_range: bool,
}

impl Pagination {
    pub fn from_page<T>(page: &Page<T>, max_visible: usize) -> Self {
        Self {
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: page.page_size,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            showing: page.item_range(),
            window: page.window(max_visible),
            out_of_range: page.is_out_of_range(),
        }
    }
}

/// Result of a list command.
///
/// Serialized as-is for JSON output; the text renderer draws `items` as a
/// table using the resource's columns.
#[derive(Debug, Clone, Serialize)]
pub struct ListView<T> {
    /// Resource name, e.g. `orders`.
    pub resource: String,

    /// Items on the current page.
    pub items: Vec<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    /// Size of the collection before search and filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,

    /// Applied search and filters, e.g. `search "drag", status = active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,

    pub pagination: Pagination,

    /// Query string that reproduces this view.
    pub query: String,
}

impl<T> ListView<T> {
    /// Returns true if nothing matched the search and filters.
    pub fn no_results(&self) -> bool {
        self.pagination.total_items == 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Builder for [`ListView`]. Start with [`list_view`].
#[derive(Debug)]
pub struct ListViewBuilder<T> {
    resource: String,
    page: Page<T>,
    max_visible: usize,
    intro: Option<String>,
    messages: Vec<Message>,
    total_count: Option<usize>,
    filter_summary: Option<String>,
    query: String,
}

impl<T> ListViewBuilder<T> {
    pub fn new(resource: impl Into<String>, page: Page<T>) -> Self {
        Self {
            resource: resource.into(),
            page,
            max_visible: DEFAULT_MAX_VISIBLE,
            intro: None,
            messages: Vec::new(),
            total_count: None,
            filter_summary: None,
            query: String::new(),
        }
    }

    /// Page count above which the pagination bar collapses.
    pub fn window(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub fn intro(mut self, text: impl Into<String>) -> Self {
        self.intro = Some(text.into());
        self
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn info(self, text: impl Into<String>) -> Self {
        self.message(Message::info(text))
    }

    pub fn warning(self, text: impl Into<String>) -> Self {
        self.message(Message::warning(text))
    }

    pub fn total_count(mut self, count: usize) -> Self {
        self.total_count = Some(count);
        self
    }

    /// Sets the filter summary; `None` leaves it unset.
    pub fn filter_summary(mut self, summary: Option<String>) -> Self {
        self.filter_summary = summary;
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn build(self) -> ListView<T> {
        let pagination = Pagination::from_page(&self.page, self.max_visible);
        ListView {
            resource: self.resource,
            items: self.page.items,
            intro: self.intro,
            messages: self.messages,
            total_count: self.total_count,
            filter_summary: self.filter_summary,
            pagination,
            query: self.query,
        }
    }
}

/// Starts building a list view of `page`.
pub fn list_view<T>(resource: impl Into<String>, page: Page<T>) -> ListViewBuilder<T> {
    ListViewBuilder::new(resource, page)
}
