use flightdesk_query::{Listable, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};

/// Flight zone classification of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Urban,
    Suburban,
    Rural,
}

impl Zone {
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Urban => "urban",
            Zone::Suburban => "suburban",
            Zone::Rural => "rural",
        }
    }
}

/// A location where review flights may be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAddress {
    pub id: String,
    pub label: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub zone: Zone,
    pub enabled: bool,
}

impl Listable for ReviewAddress {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "label" => Value::String(&self.label),
            "street" => Value::String(&self.street),
            "city" => Value::String(&self.city),
            "postcode" => Value::String(&self.postcode),
            "zone" => Value::String(self.zone.as_str()),
            "enabled" => Value::Bool(self.enabled),
            _ => Value::None,
        }
    }
}

impl Resource for ReviewAddress {
    const KIND: ResourceKind = ResourceKind::Addresses;
    const COLUMNS: &'static [&'static str] =
        &["id", "label", "city", "postcode", "zone", "enabled"];
    const FLAG: &'static str = "enabled";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{}, {}", self.label, self.city)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["label", "street", "city", "postcode"])
            .contains("city")
            .exact("zone")
            .boolean("enabled")
    }

    fn flag(&self) -> bool {
        self.enabled
    }

    fn set_flag(&mut self, on: bool) {
        self.enabled = on;
    }
}
