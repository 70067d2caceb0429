use flightdesk_query::{Listable, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};
use crate::catalog::Catalog;

/// What a user account may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
    Pilot,
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Pilot => "pilot",
            Role::Customer => "customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A console account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub city: String,
    /// Signup date, `YYYY-MM-DD`.
    pub joined: String,
    pub active: bool,
}

impl Listable for User {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "email" => Value::String(&self.email),
            "role" => Value::String(self.role.as_str()),
            "city" => Value::String(&self.city),
            "joined" => Value::String(&self.joined),
            "active" => Value::Bool(self.active),
            _ => Value::None,
        }
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;
    const COLUMNS: &'static [&'static str] = &["id", "name", "email", "role", "city", "active"];
    const FLAG: &'static str = "active";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["name", "email"])
            .exact("role")
            .contains("city")
            .boolean("active")
    }

    fn flag(&self) -> bool {
        self.active
    }

    fn set_flag(&mut self, on: bool) {
        self.active = on;
    }

    fn related(&self, catalog: &Catalog) -> Vec<(&'static str, String)> {
        let mut related = Vec::new();
        if let Some(pilot) = catalog.pilots.find(|p| p.user_id == self.id) {
            related.push(("pilot profile", format!("{} ({})", pilot.license, pilot.id)));
        }
        let orders = catalog.orders.count_where(|o| o.customer_id == self.id);
        if orders > 0 {
            related.push(("orders booked", orders.to_string()));
        }
        related
    }
}
