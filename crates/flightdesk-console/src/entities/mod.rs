//! Domain records shown by the console.
//!
//! Each entity is a [`Resource`]: a [`Listable`] record with an id, a
//! declared [`PredicateSet`], the columns its table shows, and one boolean
//! status flag the console can toggle.

mod address;
mod badge;
mod drone;
mod order;
mod package;
mod pilot;
mod survey;
mod user;

pub use address::{ReviewAddress, Zone};
pub use badge::{Badge, BadgeCategory};
pub use drone::{Drone, DroneStatus};
pub use order::{Order, OrderStatus};
pub use package::{PackageTier, ReviewPackage};
pub use pilot::{Pilot, PilotLevel};
pub use survey::{Airspace, SiteSurvey, Weather};
pub use user::{Role, User};

use flightdesk_query::{Listable, PredicateSet};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::session::{Scope, Session};

/// The entity types the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Drones,
    Pilots,
    Orders,
    Surveys,
    Packages,
    Addresses,
    Badges,
}

impl ResourceKind {
    /// All kinds, in dashboard order.
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Users,
        ResourceKind::Drones,
        ResourceKind::Pilots,
        ResourceKind::Orders,
        ResourceKind::Surveys,
        ResourceKind::Packages,
        ResourceKind::Addresses,
        ResourceKind::Badges,
    ];

    /// Command name, plural.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Drones => "drones",
            ResourceKind::Pilots => "pilots",
            ResourceKind::Orders => "orders",
            ResourceKind::Surveys => "surveys",
            ResourceKind::Packages => "packages",
            ResourceKind::Addresses => "addresses",
            ResourceKind::Badges => "badges",
        }
    }

    /// Human label for one item.
    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Users => "user",
            ResourceKind::Drones => "drone",
            ResourceKind::Pilots => "pilot",
            ResourceKind::Orders => "order",
            ResourceKind::Surveys => "site survey",
            ResourceKind::Packages => "review package",
            ResourceKind::Addresses => "review address",
            ResourceKind::Badges => "badge",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record type managed by the console.
pub trait Resource:
    Listable + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Which entity this is.
    const KIND: ResourceKind;

    /// Field names shown as table columns, in order.
    const COLUMNS: &'static [&'static str];

    /// Name of the boolean status flag.
    const FLAG: &'static str;

    /// The item's id.
    fn id(&self) -> &str;

    /// Short human label for headings.
    fn label(&self) -> String;

    /// Searchable fields and filter rules of this entity's list view.
    fn predicates() -> PredicateSet;

    /// Current value of the status flag.
    fn flag(&self) -> bool;

    /// Sets the status flag.
    fn set_flag(&mut self, on: bool);

    /// Flips the status flag.
    fn toggle(&mut self) {
        let on = self.flag();
        self.set_flag(!on);
    }

    /// Restriction applied to this entity's lists for `session`, if any.
    fn scope(_session: &Session) -> Option<Scope> {
        None
    }

    /// Human-readable links to other records, for detail views.
    fn related(&self, _catalog: &Catalog) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
