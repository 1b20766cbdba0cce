//! The alert action: turn workflow inputs into one created alert.

use clap::Args;

use crate::alert::NewAlert;
use crate::client::RootlyApi;
use crate::diagnostics::Diagnostics;
use crate::error::AlertError;
use crate::labels::parse_labels;
use crate::resolvers::EntityKind;
use crate::target::NotificationTarget;

/// Urgency used when none is given.
pub const DEFAULT_ALERT_URGENCY: &str = "High";

/// Action inputs, read from flags or the runner's `INPUT_*` variables.
#[derive(Debug, Clone, Default, Args)]
pub struct ActionInputs {
    /// Rootly API key.
    #[arg(long, env = "INPUT_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Alert summary.
    #[arg(long, env = "INPUT_SUMMARY", default_value = "")]
    pub summary: String,

    /// Alert description.
    #[arg(long, env = "INPUT_DETAILS", default_value = "")]
    pub details: String,

    /// Mark the alert as noise ("true" to enable).
    #[arg(long, env = "INPUT_SET_AS_NOISE", default_value = "false")]
    pub set_as_noise: String,

    /// Notification target type: User, Service, EscalationPolicy or Group.
    #[arg(long, env = "INPUT_NOTIFICATION_TARGET_TYPE", default_value = "")]
    pub notification_target_type: String,

    /// Notification target name (email for users).
    #[arg(long, env = "INPUT_NOTIFICATION_TARGET", default_value = "")]
    pub notification_target: String,

    /// Alert urgency name (defaults to High).
    #[arg(long, env = "INPUT_ALERT_URGENCY", default_value = "")]
    pub alert_urgency: String,

    /// External ID of the alert.
    #[arg(long, env = "INPUT_EXTERNAL_ID", default_value = "")]
    pub external_id: String,

    /// External URL of the alert.
    #[arg(long, env = "INPUT_EXTERNAL_URL", default_value = "")]
    pub external_url: String,

    /// Deduplication key.
    #[arg(long, env = "INPUT_DEDUPLICATION_KEY", default_value = "")]
    pub deduplication_key: String,

    /// Service names (comma-separated).
    #[arg(long, env = "INPUT_SERVICES", default_value = "")]
    pub services: String,

    /// Alert group names (comma-separated).
    #[arg(long, env = "INPUT_GROUPS", default_value = "")]
    pub groups: String,

    /// Labels as `key:value` pairs (comma-separated).
    #[arg(long, env = "INPUT_LABELS", default_value = "")]
    pub labels: String,

    /// Environment names (comma-separated).
    #[arg(long, env = "INPUT_ENVIRONMENTS", default_value = "")]
    pub environments: String,
}

impl ActionInputs {
    /// Whether the alert should be created as noise.
    #[must_use]
    pub fn noise(&self) -> bool {
        self.set_as_noise == "true"
    }
}

/// Names from a comma-separated list, trimmed, blanks skipped.
fn split_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// Resolve every name in `list`, one at a time and in order.
///
/// Unresolved names stay in the result as `""`.
async fn resolve_all(api: &dyn RootlyApi, kind: EntityKind, list: &str) -> Vec<String> {
    let mut ids = Vec::new();
    for name in split_names(list) {
        ids.push(api.resolve_id(kind, name).await);
    }
    ids
}

/// Resolve all inputs and create the alert, returning its identifier.
///
/// # Errors
/// Returns [`AlertError::InvalidTargetType`] when a notification target is
/// given with an unknown type. Every other failure is soft and surfaces as
/// diagnostics and empty identifiers.
pub async fn run_action(
    api: &dyn RootlyApi,
    inputs: &ActionInputs,
    diagnostics: &dyn Diagnostics,
) -> Result<String, AlertError> {
    let labels = parse_labels(&inputs.labels);

    diagnostics.debug(&format!("Api Key Length: {}", inputs.api_key.len()));
    diagnostics.debug(&format!("Summary: {}", inputs.summary));
    diagnostics.debug(&format!("Details: {}", inputs.details));
    diagnostics.debug(&format!("Set as noise: {}", inputs.noise()));
    diagnostics.debug(&format!(
        "Notification target type: {}",
        inputs.notification_target_type
    ));
    diagnostics.debug(&format!("Notification target: {}", inputs.notification_target));
    diagnostics.debug(&format!("Alert urgency: {}", inputs.alert_urgency));
    diagnostics.debug(&format!("External ID: {}", inputs.external_id));
    diagnostics.debug(&format!("External URL: {}", inputs.external_url));
    diagnostics.debug(&format!("Services: {}", inputs.services));
    diagnostics.debug(&format!("Groups: {}", inputs.groups));
    diagnostics.debug(&format!("Labels: {labels:?}"));
    diagnostics.debug(&format!("Environments: {}", inputs.environments));
    diagnostics.debug(&format!("Deduplication Key: {}", inputs.deduplication_key));

    let service_ids = resolve_all(api, EntityKind::Service, &inputs.services).await;

    let urgency = match inputs.alert_urgency.trim() {
        "" => DEFAULT_ALERT_URGENCY,
        urgency => urgency,
    };
    let alert_urgency_id = api.resolve_id(EntityKind::AlertUrgency, urgency).await;

    let group_ids = resolve_all(api, EntityKind::Group, &inputs.groups).await;
    let environment_ids = resolve_all(api, EntityKind::Environment, &inputs.environments).await;

    let target_type = inputs.notification_target_type.trim();
    let target_name = inputs.notification_target.trim();
    let notification_target = if target_type.is_empty() || target_name.is_empty() {
        NotificationTarget::empty()
    } else {
        NotificationTarget::resolve(api, target_type, target_name).await?
    };
    diagnostics.debug(&format!(
        "Resolved notification target: {}",
        serde_json::to_string(&notification_target)?
    ));

    let alert = NewAlert::new(
        inputs.summary.clone(),
        inputs.details.clone(),
        notification_target,
        alert_urgency_id,
    )
    .noise(inputs.noise())
    .external_id(inputs.external_id.clone())
    .external_url(inputs.external_url.clone())
    .service_ids(service_ids)
    .group_ids(group_ids)
    .labels(labels)
    .environment_ids(environment_ids)
    .dedup_key(inputs.deduplication_key.clone());

    let alert_id = api.create_alert(&alert).await;
    diagnostics.debug(&format!("Created Alert ID: {alert_id}"));

    Ok(alert_id)
}
