//! Dashboard: per-resource totals and status counts.
//!
//! Every number is computed through the same scoped list path the list
//! commands use, so a pilot's dashboard only counts what the pilot can see.

use flightdesk_query::QueryState;
use serde::Serialize;

use super::Message;
use crate::catalog::Catalog;
use crate::entities::{Order, OrderStatus, Resource};
use crate::error::Result;
use crate::session::Session;
use crate::store::ResourceStore;

/// Totals for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub resource: &'static str,
    pub total: usize,
    /// Name of the status flag counted in `flagged`.
    pub flag: &'static str,
    /// Items whose flag is on.
    pub flagged: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub session: Session,
    pub tiles: Vec<Tile>,
    pub order_statuses: Vec<StatusCount>,
    /// Sum of paid order amounts, in cents.
    pub paid_revenue: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl Dashboard {
    /// Builds the dashboard as seen by `session`.
    pub fn build(catalog: &Catalog, session: &Session) -> Result<Self> {
        let tiles = vec![
            tile(&catalog.users, session)?,
            tile(&catalog.drones, session)?,
            tile(&catalog.pilots, session)?,
            tile(&catalog.orders, session)?,
            tile(&catalog.surveys, session)?,
            tile(&catalog.packages, session)?,
            tile(&catalog.addresses, session)?,
            tile(&catalog.badges, session)?,
        ];

        let scope = Order::scope(session);
        let mut order_statuses = Vec::with_capacity(OrderStatus::ALL.len());
        for status in OrderStatus::ALL {
            let state = QueryState::new(1).with_filter("status", status.as_str());
            let count = catalog.orders.list(&state, scope.as_ref())?.total_items;
            order_statuses.push(StatusCount {
                status: status.as_str(),
                count,
            });
        }

        let paid = QueryState::new(usize::MAX).with_filter("paid", "true");
        let paid_revenue = catalog
            .orders
            .list(&paid, scope.as_ref())?
            .items
            .iter()
            .map(|order| order.amount)
            .sum();

        let mut messages = Vec::new();
        if let Some(scope) = &scope {
            messages.push(Message::info(format!("orders limited to {scope}")));
        }

        Ok(Self {
            session: session.clone(),
            tiles,
            order_statuses,
            paid_revenue,
            messages,
        })
    }

    pub fn tile(&self, resource: &str) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.resource == resource)
    }
}

fn tile<S>(store: &S, session: &Session) -> Result<Tile>
where
    S: ResourceStore,
{
    let scope = S::Item::scope(session);
    let all = QueryState::new(1);
    let total = store.list(&all, scope.as_ref())?.total_items;
    let on = QueryState::new(1).with_filter(S::Item::FLAG, "true");
    let flagged = store.list(&on, scope.as_ref())?.total_items;
    Ok(Tile {
        resource: S::Item::KIND.as_str(),
        total,
        flag: S::Item::FLAG,
        flagged,
    })
}
