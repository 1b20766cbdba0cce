//! Notification targets: who gets paged for an alert.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::client::RootlyApi;
use crate::error::AlertError;
use crate::resolvers::EntityKind;

/// Kinds of notification target Rootly accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    User,
    Service,
    EscalationPolicy,
    Group,
}

impl TargetKind {
    pub const ALL: [Self; 4] = [Self::User, Self::Service, Self::EscalationPolicy, Self::Group];

    /// Canonical type label sent to the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Service => "Service",
            Self::EscalationPolicy => "EscalationPolicy",
            Self::Group => "Group",
        }
    }

    /// Entity looked up to find the target's identifier.
    #[must_use]
    pub const fn entity(self) -> EntityKind {
        match self {
            Self::User => EntityKind::User,
            Self::Service => EntityKind::Service,
            Self::EscalationPolicy => EntityKind::EscalationPolicy,
            Self::Group => EntityKind::Group,
        }
    }

    /// Resolve `name` into a target of this kind.
    pub async fn resolve(self, api: &dyn RootlyApi, name: &str) -> NotificationTarget {
        NotificationTarget {
            id: api.resolve_id(self.entity(), name).await,
            kind: Some(self),
        }
    }
}

impl FromStr for TargetKind {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "service" => Ok(Self::Service),
            "escalationpolicy" => Ok(Self::EscalationPolicy),
            "group" => Ok(Self::Group),
            _ => Err(AlertError::InvalidTargetType),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved notification target. The default value is the unset target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationTarget {
    /// Rootly identifier, empty when unset or unresolved.
    pub id: String,
    /// Target kind, `None` when unset.
    pub kind: Option<TargetKind>,
}

impl NotificationTarget {
    /// The unset target: empty id and type.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a target from parts already known.
    pub fn new(kind: TargetKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
        }
    }

    /// True iff both id and type are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.kind.is_none()
    }

    /// Type label as sent to the API, `""` when unset.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        self.kind.map_or("", TargetKind::as_str)
    }

    /// Resolve a target from a case-insensitive type tag and a name.
    ///
    /// # Errors
    /// Returns [`AlertError::InvalidTargetType`] when `target_type` is empty
    /// or unknown. Lookup failures are soft and leave the id empty.
    pub async fn resolve(
        api: &dyn RootlyApi,
        target_type: &str,
        name: &str,
    ) -> Result<Self, AlertError> {
        let kind: TargetKind = target_type.parse()?;
        Ok(kind.resolve(api, name).await)
    }

    /// Re-resolve only the id, keeping the stored type.
    ///
    /// # Errors
    /// Returns [`AlertError::InvalidTargetType`] when no type is stored.
    pub async fn with_resolved_id(
        &self,
        api: &dyn RootlyApi,
        name: &str,
    ) -> Result<Self, AlertError> {
        let kind = self.kind.ok_or(AlertError::InvalidTargetType)?;
        Ok(kind.resolve(api, name).await)
    }
}

impl Serialize for NotificationTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NotificationTarget", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.type_label())?;
        state.end()
    }
}
