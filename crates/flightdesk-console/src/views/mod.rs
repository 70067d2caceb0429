//! View types produced by console commands.
//!
//! Commands build a view value; [`crate::render`] turns it into text or JSON.
//!
//! ```rust
//! use flightdesk_console::views::list_view;
//! use flightdesk_query::paginate;
//!
//! let page = paginate(vec!["d-01", "d-02"], 1, 10);
//! let view = list_view("drones", page)
//!     .intro("Fleet")
//!     .warning("unknown filter 'colour' ignored")
//!     .build();
//! assert_eq!(view.pagination.total_pages, 1);
//! ```

mod dashboard;
mod detail_view;
mod list_view;
mod message;

pub use dashboard::{Dashboard, StatusCount, Tile};
pub use detail_view::{detail_view, ActionSuggestion, DetailView, DetailViewBuilder};
pub use list_view::{list_view, ListView, ListViewBuilder, Pagination};
pub use message::{Message, MessageLevel};
