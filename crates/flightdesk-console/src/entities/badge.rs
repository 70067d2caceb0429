use flightdesk_query::{Listable, Number, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Safety,
    Skill,
    Milestone,
}

impl BadgeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeCategory::Safety => "safety",
            BadgeCategory::Skill => "skill",
            BadgeCategory::Milestone => "milestone",
        }
    }
}

/// An award pilots earn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: BadgeCategory,
    /// Flight hours needed to earn it.
    pub required_hours: u32,
    pub enabled: bool,
}

impl Listable for Badge {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "description" => Value::String(&self.description),
            "category" => Value::String(self.category.as_str()),
            "required_hours" => Value::Number(Number::from(self.required_hours)),
            "enabled" => Value::Bool(self.enabled),
            _ => Value::None,
        }
    }
}

impl Resource for Badge {
    const KIND: ResourceKind = ResourceKind::Badges;
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "category", "required_hours", "enabled"];
    const FLAG: &'static str = "enabled";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["name", "description"])
            .exact("category")
            .boolean("enabled")
    }

    fn flag(&self) -> bool {
        self.enabled
    }

    fn set_flag(&mut self, on: bool) {
        self.enabled = on;
    }
}
