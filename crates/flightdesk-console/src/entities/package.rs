use flightdesk_query::{Listable, Number, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    Basic,
    Standard,
    Premium,
}

impl PackageTier {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageTier::Basic => "basic",
            PackageTier::Standard => "standard",
            PackageTier::Premium => "premium",
        }
    }
}

/// A bookable flight review offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tier: PackageTier,
    pub duration_minutes: u32,
    /// Price in cents.
    pub price: u64,
    pub published: bool,
}

impl Listable for ReviewPackage {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "description" => Value::String(&self.description),
            "tier" => Value::String(self.tier.as_str()),
            "duration_minutes" => Value::Number(Number::from(self.duration_minutes)),
            "price" => Value::Number(Number::from(self.price)),
            "published" => Value::Bool(self.published),
            _ => Value::None,
        }
    }
}

impl Resource for ReviewPackage {
    const KIND: ResourceKind = ResourceKind::Packages;
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "tier", "duration_minutes", "price", "published"];
    const FLAG: &'static str = "published";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["name", "description"])
            .exact("tier")
            .exact("duration_minutes")
            .boolean("published")
    }

    fn flag(&self) -> bool {
        self.published
    }

    fn set_flag(&mut self, on: bool) {
        self.published = on;
    }
}
