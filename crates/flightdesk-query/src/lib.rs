//! Flightdesk query - generic list query engine for in-memory collections.
//!
//! Every list screen of an admin console does the same thing: take a full
//! collection, keep the items that match a search box and a row of filter
//! dropdowns, cut out one page, and draw pagination links. This crate does
//! that once, generically:
//!
//! - [`PredicateSet`]: which fields are searchable and how each filter field
//!   compares (exact, case-insensitive contains, boolean-as-string)
//! - [`QueryState`]: search text, filter values, sort and page of one view,
//!   mirrored to and from URL query strings
//! - [`paginate`] / [`Page`]: page slicing and pagination metadata
//! - [`compute_page_window`]: page links with ellipses for the pagination bar
//!
//! None of these operations fail. Empty collections, filters that match
//! nothing and pages far out of range all produce valid, possibly empty,
//! results.
//!
//! # Quick Start
//!
//! ```rust
//! use flightdesk_query::{Listable, Number, PageLink, PredicateSet, QueryState, Value};
//!
//! struct Order {
//!     id: u32,
//!     customer: String,
//!     status: &'static str,
//! }
//!
//! impl Listable for Order {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "id" => Value::Number(Number::from(self.id)),
//!             "customer" => Value::String(&self.customer),
//!             "status" => Value::String(self.status),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let orders: Vec<Order> = (1..=23)
//!     .map(|id| Order {
//!         id,
//!         customer: format!("Customer {id}"),
//!         status: if id % 2 == 0 { "paid" } else { "pending" },
//!     })
//!     .collect();
//!
//! let predicates = PredicateSet::new().search_field("customer").exact("status");
//! let state = QueryState::new(5).with_filter("status", "all").with_page(3);
//!
//! let page = predicates.run(&orders, &state, Order::accessor);
//! assert_eq!(page.items.len(), 5);
//! assert_eq!(page.items[0].id, 11);
//! assert_eq!(page.total_pages, 5);
//! assert_eq!(page.window(5).len(), 5);
//! assert!(!page.window(5).contains(&PageLink::Ellipsis));
//! ```
//!
//! # Match Semantics
//!
//! ```text
//! match = (search text empty ∨ some search field contains it, ignoring case)
//!       ∧ (every active filter matches its field)
//! ```
//!
//! A filter is inactive when its value is empty, or when it is `all` for an
//! exact or boolean rule.

mod error;
mod filter;
mod ordering;
mod page;
mod params;
mod predicates;
mod state;
mod traits;
mod value;
mod window;

// Re-export public API
pub use error::{QueryError, Result};
pub use filter::{FilterRule, MatchRule, ALL};
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use page::{clamp_page, paginate, total_pages, Page};
pub use params::{is_reserved, PAGE_PARAM, SEARCH_PARAM, SIZE_PARAM, SORT_PARAM};
pub use predicates::{filter_collection, PredicateSet};
pub use state::{QueryState, DEFAULT_PAGE_SIZE};
pub use traits::Listable;
pub use value::{Number, Value};
pub use window::{compute_page_window, PageLink, DEFAULT_MAX_VISIBLE};
