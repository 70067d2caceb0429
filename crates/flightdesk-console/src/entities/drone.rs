use flightdesk_query::{Listable, Number, PredicateSet, Value};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceKind};
use crate::catalog::Catalog;
use crate::session::{Scope, Session};
use crate::store::ResourceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DroneStatus {
    Active,
    Maintenance,
    Retired,
}

impl DroneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DroneStatus::Active => "active",
            DroneStatus::Maintenance => "maintenance",
            DroneStatus::Retired => "retired",
        }
    }
}

/// An aircraft in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: String,
    pub nickname: String,
    pub model: String,
    pub serial: String,
    pub status: DroneStatus,
    /// Pilot responsible for the aircraft, if assigned.
    #[serde(default)]
    pub owner_pilot_id: Option<String>,
    pub flight_hours: f64,
    pub available: bool,
}

impl Listable for Drone {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "nickname" => Value::String(&self.nickname),
            "model" => Value::String(&self.model),
            "serial" => Value::String(&self.serial),
            "status" => Value::String(self.status.as_str()),
            "owner_pilot_id" => self.owner_pilot_id.as_deref().into(),
            "flight_hours" => Value::Number(Number::from(self.flight_hours)),
            "available" => Value::Bool(self.available),
            _ => Value::None,
        }
    }
}

impl Resource for Drone {
    const KIND: ResourceKind = ResourceKind::Drones;
    const COLUMNS: &'static [&'static str] =
        &["id", "nickname", "model", "status", "flight_hours", "available"];
    const FLAG: &'static str = "available";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.nickname, self.model)
    }

    fn predicates() -> PredicateSet {
        PredicateSet::new()
            .search_fields(["nickname", "model", "serial"])
            .exact("status")
            .contains("model")
            .exact("owner_pilot_id")
            .boolean("available")
    }

    fn flag(&self) -> bool {
        self.available
    }

    fn set_flag(&mut self, on: bool) {
        self.available = on;
    }

    fn scope(session: &Session) -> Option<Scope> {
        session
            .pilot_id
            .as_ref()
            .map(|id| Scope::new("owner_pilot_id", id.clone()))
    }

    fn related(&self, catalog: &Catalog) -> Vec<(&'static str, String)> {
        let owner = match &self.owner_pilot_id {
            Some(id) => match catalog.pilots.get(id) {
                Ok(Some(pilot)) => format!("{} ({})", pilot.name, pilot.id),
                _ => id.clone(),
            },
            None => "unassigned".to_string(),
        };
        vec![("owner", owner)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdesk_query::{OrderBy, QueryState};

    fn drone(id: &str, nickname: &str, hours: f64, owner: Option<&str>) -> Drone {
        Drone {
            id: id.to_string(),
            nickname: nickname.to_string(),
            model: "Mavic 3".to_string(),
            serial: format!("SN-{id}"),
            status: DroneStatus::Active,
            owner_pilot_id: owner.map(str::to_string),
            flight_hours: hours,
            available: true,
        }
    }

    #[test]
    fn unassigned_drone_never_matches_owner_filter() {
        let drones = vec![drone("d1", "Kite", 3.0, None), drone("d2", "Hawk", 4.0, Some("p-01"))];
        let state = QueryState::default().with_filter("owner_pilot_id", "p-01");
        let page = Drone::predicates().run(&drones, &state, Drone::accessor);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "d2");
    }

    #[test]
    fn sorts_by_flight_hours() {
        let drones = vec![
            drone("d1", "Kite", 30.5, None),
            drone("d2", "Hawk", 4.0, None),
            drone("d3", "Swift", 12.25, None),
        ];
        let state = QueryState::default().with_sort(OrderBy::desc("flight_hours"));
        let page = Drone::predicates().run(&drones, &state, Drone::accessor);
        let ids: Vec<&str> = page.items.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d3", "d2"]);
    }

    #[test]
    fn owner_defaults_to_none_when_missing() {
        let json = r#"{"id":"d9","nickname":"Moth","model":"Mini 4","serial":"SN-9",
            "status":"maintenance","flight_hours":0,"available":false}"#;
        let drone: Drone = serde_json::from_str(json).unwrap();
        assert_eq!(drone.owner_pilot_id, None);
        assert_eq!(drone.status, DroneStatus::Maintenance);
    }
}
