use flightdesk_query::{Listable, Number, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};
use crate::catalog::Catalog;
use crate::store::ResourceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PilotLevel {
    Trainee,
    Certified,
    Senior,
}

impl PilotLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            PilotLevel::Trainee => "trainee",
            PilotLevel::Certified => "certified",
            PilotLevel::Senior => "senior",
        }
    }
}

/// A pilot profile, linked to the user account that flies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub license: String,
    pub region: String,
    pub level: PilotLevel,
    /// Average review rating, 0 to 5.
    pub rating: f64,
    pub verified: bool,
}

impl Listable for Pilot {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "user_id" => Value::String(&self.user_id),
            "name" => Value::String(&self.name),
            "license" => Value::String(&self.license),
            "region" => Value::String(&self.region),
            "level" => Value::String(self.level.as_str()),
            "rating" => Value::Number(Number::from(self.rating)),
            "verified" => Value::Bool(self.verified),
            _ => Value::None,
        }
    }
}

impl Resource for Pilot {
    const KIND: ResourceKind = ResourceKind::Pilots;
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "license", "region", "level", "rating", "verified"];
    const FLAG: &'static str = "verified";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.license)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["name", "license"])
            .exact("level")
            .contains("region")
            .boolean("verified")
    }

    fn flag(&self) -> bool {
        self.verified
    }

    fn set_flag(&mut self, on: bool) {
        self.verified = on;
    }

    fn related(&self, catalog: &Catalog) -> Vec<(&'static str, String)> {
        let mut related = Vec::new();
        if let Ok(Some(user)) = catalog.users.get(&self.user_id) {
            related.push(("account", format!("{} ({})", user.email, user.id)));
        }
        let drones = catalog
            .drones
            .count_where(|d| d.owner_pilot_id.as_deref() == Some(self.id.as_str()));
        related.push(("drones", drones.to_string()));
        let orders = catalog
            .orders
            .count_where(|o| o.pilot_id.as_deref() == Some(self.id.as_str()));
        related.push(("orders", orders.to_string()));
        related
    }
}
