//! The caller identity every command runs under.
//!
//! A [`Session`] is resolved once from the `--as` user id and passed
//! explicitly to whatever needs it. Role-based list restrictions are
//! expressed as a [`Scope`]: a locked filter applied on top of whatever the
//! user asked for.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::entities::Role;
use crate::error::{ConsoleError, Result};
use crate::store::ResourceStore;

/// A locked filter restricting a list to what the session may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    /// Field the restriction applies to.
    pub field: &'static str,
    /// Value the field must equal.
    pub value: String,
}

impl Scope {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

/// Who is running the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub role: Role,
    /// Pilot profile id, for pilot-role sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pilot_id: Option<String>,
}

impl Session {
    /// Looks `user_id` up in the catalog and builds the session.
    ///
    /// Pilot-role users must have a pilot profile linked to them.
    pub fn resolve(catalog: &Catalog, user_id: &str) -> Result<Self> {
        let id = user_id.trim();
        let user = catalog
            .users
            .get(id)?
            .ok_or_else(|| ConsoleError::UnknownUser(id.to_string()))?;

        let pilot_id = match user.role {
            Role::Pilot => {
                let pilot = catalog
                    .pilots
                    .find(|p| p.user_id == user.id)
                    .ok_or_else(|| ConsoleError::MissingPilotProfile(user.id.clone()))?;
                Some(pilot.id)
            }
            _ => None,
        };

        let session = Session {
            user_id: user.id,
            name: user.name,
            role: user.role,
            pilot_id,
        };
        tracing::info!(
            user = %session.user_id,
            role = %session.role,
            pilot = session.pilot_id.as_deref().unwrap_or("-"),
            "session resolved"
        );
        Ok(session)
    }

    /// Whether lists are shown unrestricted.
    pub fn sees_everything(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Operator)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.user_id, self.role)
    }
}
