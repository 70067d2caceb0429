use flightdesk_query::{Listable, Number, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind, Role};
use crate::catalog::Catalog;
use crate::session::{Scope, Session};
use crate::store::ResourceStore;

/// Where a booking is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Scheduled,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Scheduled => "scheduled",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A flight review booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// User who booked.
    pub customer_id: String,
    pub customer_name: String,
    /// Assigned pilot, once scheduled.
    #[serde(default)]
    pub pilot_id: Option<String>,
    pub package_id: String,
    pub address_id: String,
    pub status: OrderStatus,
    /// Flight date, `YYYY-MM-DD`.
    pub scheduled_for: String,
    /// Price in cents.
    pub amount: u64,
    pub paid: bool,
}

impl Listable for Order {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "customer_id" => Value::String(&self.customer_id),
            "customer_name" => Value::String(&self.customer_name),
            "pilot_id" => self.pilot_id.as_deref().into(),
            "package_id" => Value::String(&self.package_id),
            "address_id" => Value::String(&self.address_id),
            "status" => Value::String(self.status.as_str()),
            "scheduled_for" => Value::String(&self.scheduled_for),
            "amount" => Value::Number(Number::from(self.amount)),
            "paid" => Value::Bool(self.paid),
            _ => Value::None,
        }
    }
}

impl Resource for Order {
    const KIND: ResourceKind = ResourceKind::Orders;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "customer_name",
        "package_id",
        "status",
        "scheduled_for",
        "amount",
        "paid",
    ];
    const FLAG: &'static str = "paid";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("Order {} for {}", self.id, self.customer_name)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["id", "customer_name"])
            .exact("status")
            .exact("package_id")
            .exact("pilot_id")
            .exact("customer_id")
            .boolean("paid")
    }

    fn flag(&self) -> bool {
        self.paid
    }

    fn set_flag(&mut self, on: bool) {
        self.paid = on;
    }

    fn scope(session: &Session) -> Option<Scope> {
        match session.role {
            Role::Pilot => session
                .pilot_id
                .as_ref()
                .map(|id| Scope::new("pilot_id", id.clone())),
            Role::Customer => Some(Scope::new("customer_id", session.user_id.clone())),
            Role::Admin | Role::Operator => None,
        }
    }

    fn related(&self, catalog: &Catalog) -> Vec<(&'static str, String)> {
        let mut related = Vec::new();
        if let Ok(Some(package)) = catalog.packages.get(&self.package_id) {
            related.push(("package", format!("{} ({})", package.name, package.id)));
        }
        if let Ok(Some(address)) = catalog.addresses.get(&self.address_id) {
            related.push(("address", format!("{} ({})", address.label(), address.id)));
        }
        match &self.pilot_id {
            Some(id) => {
                if let Ok(Some(pilot)) = catalog.pilots.get(id) {
                    related.push(("pilot", format!("{} ({})", pilot.name, pilot.id)));
                }
            }
            None => related.push(("pilot", "unassigned".to_string())),
        }
        if let Some(survey) = catalog.surveys.find(|s| s.order_id == self.id) {
            let state = if survey.completed { "completed" } else { "open" };
            related.push(("survey", format!("{} ({state})", survey.id)));
        }
        related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdesk_query::QueryState;

    fn order(id: &str, status: OrderStatus, amount: u64) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "u-002".to_string(),
            customer_name: "Bruno Costa".to_string(),
            pilot_id: None,
            package_id: "pk-basic".to_string(),
            address_id: "a-01".to_string(),
            status,
            scheduled_for: "2025-06-01".to_string(),
            amount,
            paid: false,
        }
    }

    #[test]
    fn amount_filter_compares_numerically() {
        let orders = vec![
            order("o-1", OrderStatus::Pending, 12000),
            order("o-2", OrderStatus::Pending, 9900),
        ];
        let predicates = Order::predicates().exact("amount");
        let state = QueryState::default().with_filter("amount", "9900.0");
        let page = predicates.run(&orders, &state, Order::accessor);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "o-2");
    }

    #[test]
    fn status_all_is_inactive() {
        let orders = vec![
            order("o-1", OrderStatus::Pending, 1),
            order("o-2", OrderStatus::Cancelled, 1),
        ];
        let state = QueryState::default().with_filter("status", "ALL");
        assert_eq!(Order::predicates().count(&orders, &state, Order::accessor), 2);
    }
}
