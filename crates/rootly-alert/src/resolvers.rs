//! Name-to-identifier lookups.
//!
//! Every entity is looked up the same way: one filtered GET against its
//! collection, taking the first returned resource. [`EntityKind`] holds the
//! per-entity collection path and filter parameter.

use std::fmt;

use tracing::debug;

use crate::client::RootlyClient;
use crate::error::AlertError;
use crate::models::{ApiListResponse, ResourceId};

/// Rootly entities that can be resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Looked up by email address.
    User,
    Service,
    /// Alert group.
    Group,
    EscalationPolicy,
    AlertUrgency,
    Environment,
}

impl EntityKind {
    /// Collection endpoint.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::User => "/v1/users",
            Self::Service => "/v1/services",
            Self::Group => "/v1/alert_groups",
            Self::EscalationPolicy => "/v1/escalation_policies",
            Self::AlertUrgency => "/v1/alert_urgencies",
            Self::Environment => "/v1/environments",
        }
    }

    /// Query parameter carrying the name, already percent-encoded.
    ///
    /// Alert groups are matched through `include` rather than a name filter.
    #[must_use]
    pub const fn query_param(self) -> &'static str {
        match self {
            Self::User => "filter%5Bemail%5D",
            Self::Group => "include",
            Self::Service
            | Self::EscalationPolicy
            | Self::AlertUrgency
            | Self::Environment => "filter%5Bname%5D",
        }
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Service => "Service",
            Self::Group => "Alert group",
            Self::EscalationPolicy => "Escalation policy",
            Self::AlertUrgency => "Alert urgency",
            Self::Environment => "Environment",
        }
    }

    /// Path and query for looking up `name`.
    #[must_use]
    pub fn lookup_path(self, name: &str) -> String {
        format!(
            "{}?{}={}",
            self.collection(),
            self.query_param(),
            urlencoding::encode(name)
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl RootlyClient {
    /// Look up `name` and return the first match's identifier.
    ///
    /// # Errors
    /// Returns error on transport failures, non-success statuses or
    /// malformed responses.
    pub async fn find_id(&self, kind: EntityKind, name: &str) -> Result<Option<String>, AlertError> {
        let response: ApiListResponse<ResourceId> = self.get(&kind.lookup_path(name)).await?;
        Ok(response
            .data
            .and_then(|resources| resources.into_iter().next())
            .map(|resource| resource.id))
    }

    /// Resolve `name` to an identifier, or `""` when it cannot be resolved.
    ///
    /// A missing entity emits a warning; any other failure emits an error.
    pub async fn resolve_id(&self, kind: EntityKind, name: &str) -> String {
        match self.find_id(kind, name).await {
            Ok(Some(id)) => {
                debug!(kind = %kind, lookup = %name, id = %id, "Resolved entity");
                id
            }
            Ok(None) => {
                self.diagnostics()
                    .warning(&format!("{} '{name}' not found", kind.label()));
                String::new()
            }
            Err(e) => {
                self.diagnostics().error(&e.to_string());
                String::new()
            }
        }
    }

    /// Resolve a user by email.
    pub async fn user_id(&self, email: &str) -> String {
        self.resolve_id(EntityKind::User, email).await
    }

    /// Resolve a service by name.
    pub async fn service_id(&self, name: &str) -> String {
        self.resolve_id(EntityKind::Service, name).await
    }

    /// Resolve an alert group by name.
    pub async fn group_id(&self, name: &str) -> String {
        self.resolve_id(EntityKind::Group, name).await
    }

    /// Resolve an escalation policy by name.
    pub async fn escalation_policy_id(&self, name: &str) -> String {
        self.resolve_id(EntityKind::EscalationPolicy, name).await
    }

    /// Resolve an alert urgency by name.
    pub async fn alert_urgency_id(&self, name: &str) -> String {
        self.resolve_id(EntityKind::AlertUrgency, name).await
    }

    /// Resolve an environment by name.
    pub async fn environment_id(&self, name: &str) -> String {
        self.resolve_id(EntityKind::Environment, name).await
    }
}
