use flightdesk_query::{Listable, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};
use crate::catalog::Catalog;
use crate::session::{Scope, Session};
use crate::store::ResourceStore;

/// Airspace class of a flight site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Airspace {
    Open,
    Controlled,
    Restricted,
}

impl Airspace {
    pub fn as_str(self) -> &'static str {
        match self {
            Airspace::Open => "open",
            Airspace::Controlled => "controlled",
            Airspace::Restricted => "restricted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Clear,
    Windy,
    Rain,
}

impl Weather {
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Windy => "windy",
            Weather::Rain => "rain",
        }
    }
}

/// Pre-flight inspection of the site an order flies at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSurvey {
    pub id: String,
    pub order_id: String,
    pub pilot_id: String,
    pub site: String,
    pub airspace: Airspace,
    pub weather: Weather,
    #[serde(default)]
    pub notes: String,
    pub completed: bool,
}

impl Listable for SiteSurvey {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "order_id" => Value::String(&self.order_id),
            "pilot_id" => Value::String(&self.pilot_id),
            "site" => Value::String(&self.site),
            "airspace" => Value::String(self.airspace.as_str()),
            "weather" => Value::String(self.weather.as_str()),
            "notes" => Value::String(&self.notes),
            "completed" => Value::Bool(self.completed),
            _ => Value::None,
        }
    }
}

impl Resource for SiteSurvey {
    const KIND: ResourceKind = ResourceKind::Surveys;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "order_id",
        "pilot_id",
        "site",
        "airspace",
        "weather",
        "completed",
    ];
    const FLAG: &'static str = "completed";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("Survey of {} (order {})", self.site, self.order_id)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["site", "notes", "order_id"])
            .exact("airspace")
            .exact("weather")
            .exact("pilot_id")
            .boolean("completed")
    }

    fn flag(&self) -> bool {
        self.completed
    }

    fn set_flag(&mut self, on: bool) {
        self.completed = on;
    }

    fn scope(session: &Session) -> Option<Scope> {
        session
            .pilot_id
            .as_ref()
            .map(|id| Scope::new("pilot_id", id.clone()))
    }

    fn related(&self, catalog: &Catalog) -> Vec<(&'static str, String)> {
        let mut related = Vec::new();
        if let Ok(Some(order)) = catalog.orders.get(&self.order_id) {
            related.push((
                "order",
                format!("{} for {} on {}", order.id, order.customer_name, order.scheduled_for),
            ));
        }
        if let Ok(Some(pilot)) = catalog.pilots.get(&self.pilot_id) {
            related.push(("pilot", format!("{} ({})", pilot.name, pilot.id)));
        }
        related
    }
}
