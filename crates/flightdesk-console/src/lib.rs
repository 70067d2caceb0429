//! Flightdesk console - terminal admin for drone flight review bookings.
//!
//! The console manages users, drones, pilots, orders, site surveys, review
//! packages, addresses and badges. Each list goes through the generic
//! engine in [`flightdesk_query`]: search, filters, sort, one page, and a
//! page window for the pagination bar.
//!
//! - [`entities`]: the record types and their [`Resource`] declarations
//! - [`store`]: the [`ResourceStore`] contract and its in-memory store
//! - [`session`]: who is running the command and what they may see
//! - [`views`] and [`render`]: view values, rendered as text or JSON
//! - [`cli`]: the `flightdesk` command line
//!
//! # Example
//!
//! ```rust
//! use flightdesk_console::{Catalog, ResourceStore};
//! use flightdesk_query::QueryState;
//!
//! let catalog = Catalog::demo();
//! let state = QueryState::new(5).with_search("drag");
//! let page = catalog.drones.list(&state, None).unwrap();
//! assert_eq!(page.total_items, 3);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod entities;
pub mod error;
pub mod mock;
pub mod output;
pub mod render;
pub mod session;
pub mod store;
pub mod theme;
pub mod views;

pub use catalog::Catalog;
pub use cli::{build_state, run_with_catalog, Action, Cli, Command, ListArgs};
pub use config::Config;
pub use entities::{Resource, ResourceKind};
pub use error::{ConsoleError, Result};
pub use output::OutputMode;
pub use render::Renderer;
pub use session::{Scope, Session};
pub use store::{MemoryStore, ResourceStore};
pub use theme::Theme;
