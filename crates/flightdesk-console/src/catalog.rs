//! One store per entity.

use crate::entities::{
    Badge, Drone, Order, Pilot, ReviewAddress, ReviewPackage, SiteSurvey, User,
};
use crate::store::MemoryStore;

/// Every collection the console manages.
#[derive(Debug, Default)]
pub struct Catalog {
    pub users: MemoryStore<User>,
    pub drones: MemoryStore<Drone>,
    pub pilots: MemoryStore<Pilot>,
    pub orders: MemoryStore<Order>,
    pub surveys: MemoryStore<SiteSurvey>,
    pub packages: MemoryStore<ReviewPackage>,
    pub addresses: MemoryStore<ReviewAddress>,
    pub badges: MemoryStore<Badge>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog seeded with the built-in demo data.
    pub fn demo() -> Self {
        crate::mock::catalog()
    }
}
