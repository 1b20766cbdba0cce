//! Alert creation.

use tracing::info;

use crate::attributes::{attach_non_blank, attach_non_empty, AttributeMap, AttributeValue};
use crate::client::RootlyClient;
use crate::labels::Label;
use crate::models::{ApiResponse, CreateAlertBody, ResourceId};
use crate::target::NotificationTarget;

/// Source recorded on alerts created through the API.
const ALERT_SOURCE: &str = "api";

/// Status of newly created alerts.
const ALERT_STATUS: &str = "triggered";

/// An alert to be created.
///
/// Optional scalars set to `Some("")` are treated as absent; optional lists
/// lose their blank entries before being sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAlert {
    pub summary: String,
    pub description: String,
    pub set_as_noise: bool,
    pub notification_target: NotificationTarget,
    pub alert_urgency_id: String,
    pub external_id: Option<String>,
    pub external_url: Option<String>,
    pub service_ids: Option<Vec<String>>,
    pub group_ids: Option<Vec<String>>,
    pub labels: Option<Vec<Label>>,
    pub environment_ids: Option<Vec<String>>,
    pub dedup_key: Option<String>,
}

impl NewAlert {
    /// Create an alert with its required fields.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        notification_target: NotificationTarget,
        alert_urgency_id: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            notification_target,
            alert_urgency_id: alert_urgency_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn noise(mut self, set_as_noise: bool) -> Self {
        self.set_as_noise = set_as_noise;
        self
    }

    #[must_use]
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    #[must_use]
    pub fn external_url(mut self, external_url: impl Into<String>) -> Self {
        self.external_url = Some(external_url.into());
        self
    }

    #[must_use]
    pub fn service_ids(mut self, ids: Vec<String>) -> Self {
        self.service_ids = Some(ids);
        self
    }

    #[must_use]
    pub fn group_ids(mut self, ids: Vec<String>) -> Self {
        self.group_ids = Some(ids);
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn environment_ids(mut self, ids: Vec<String>) -> Self {
        self.environment_ids = Some(ids);
        self
    }

    #[must_use]
    pub fn dedup_key(mut self, dedup_key: impl Into<String>) -> Self {
        self.dedup_key = Some(dedup_key.into());
        self
    }

    /// Build the attribute map sent to the API.
    #[must_use]
    pub fn attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        let target = &self.notification_target;

        for (key, value) in [
            ("source", AttributeValue::from(ALERT_SOURCE)),
            ("summary", self.summary.as_str().into()),
            ("description", self.description.as_str().into()),
            ("noise", self.set_as_noise.into()),
            ("status", ALERT_STATUS.into()),
            ("notification_target_type", target.type_label().into()),
            ("notification_target_id", target.id.as_str().into()),
            ("alert_urgency_id", self.alert_urgency_id.as_str().into()),
        ] {
            attributes.insert(key.to_string(), value);
        }

        attach_non_empty(self.external_id.as_deref(), "external_id", &mut attributes);
        attach_non_empty(self.external_url.as_deref(), "external_url", &mut attributes);

        attach_non_blank(self.service_ids.as_deref(), "service_ids", &mut attributes);
        attach_non_blank(self.group_ids.as_deref(), "group_ids", &mut attributes);
        attach_non_blank(self.labels.as_deref(), "labels", &mut attributes);
        attach_non_blank(
            self.environment_ids.as_deref(),
            "environment_ids",
            &mut attributes,
        );

        attach_non_empty(self.dedup_key.as_deref(), "deduplication_key", &mut attributes);

        attributes
    }

    /// Wrap the attributes in the JSON:API request envelope.
    #[must_use]
    pub fn request_body(&self) -> CreateAlertBody {
        CreateAlertBody::new(self.attributes())
    }
}

impl RootlyClient {
    /// Create an alert and return its identifier.
    ///
    /// Failures are reported as an error diagnostic followed by a debug dump
    /// of the request body, and yield `""`.
    pub async fn create_alert(&self, alert: &NewAlert) -> String {
        let body = match serde_json::to_string(&alert.request_body()) {
            Ok(body) => body,
            Err(e) => {
                self.diagnostics().error(&e.to_string());
                return String::new();
            }
        };

        match self
            .post::<ApiResponse<ResourceId>>("/v1/alerts", body.clone())
            .await
        {
            Ok(response) => {
                info!(alert_id = %response.data.id, "Alert created");
                response.data.id
            }
            Err(e) => {
                self.diagnostics().error(&e.to_string());
                self.diagnostics().debug(&format!("Alert Body:\n{body}"));
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetKind;
    use serde_json::json;

    fn alert() -> NewAlert {
        NewAlert::new(
            "Test Alert Summary",
            "Test Alert Description",
            NotificationTarget::new(TargetKind::User, "user-123"),
            "urgency-456",
        )
    }

    #[test]
    fn test_required_attributes() {
        let body = serde_json::to_value(alert().request_body()).unwrap();
        assert_eq!(
            body,
            json!({
                "data": {
                    "type": "alerts",
                    "attributes": {
                        "source": "api",
                        "summary": "Test Alert Summary",
                        "description": "Test Alert Description",
                        "noise": false,
                        "status": "triggered",
                        "notification_target_type": "User",
                        "notification_target_id": "user-123",
                        "alert_urgency_id": "urgency-456",
                    }
                }
            })
        );
    }

    #[test]
    fn test_noise_is_boolean() {
        let attributes = alert().noise(true).attributes();
        assert_eq!(attributes["noise"], AttributeValue::Flag(true));
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        let attributes = alert()
            .external_id("")
            .external_url("")
            .dedup_key("")
            .service_ids(vec![String::new(), "  ".to_string()])
            .labels(vec![Label::new("env", "")])
            .attributes();

        for key in [
            "external_id",
            "external_url",
            "deduplication_key",
            "service_ids",
            "labels",
        ] {
            assert!(!attributes.contains_key(key), "{key} should be omitted");
        }
    }

    #[test]
    fn test_optionals_are_attached() {
        let attributes = alert()
            .external_id("ext-123")
            .external_url("https://example.com")
            .service_ids(vec!["service-1".to_string(), "service-2".to_string()])
            .group_ids(vec!["group-1".to_string()])
            .labels(vec![Label::new("env", "prod")])
            .environment_ids(vec!["env-1".to_string()])
            .dedup_key("test-dedup-key")
            .attributes();

        let json = serde_json::to_value(&attributes).unwrap();
        assert_eq!(json["external_id"], "ext-123");
        assert_eq!(json["external_url"], "https://example.com");
        assert_eq!(json["service_ids"], json!(["service-1", "service-2"]));
        assert_eq!(json["group_ids"], json!(["group-1"]));
        assert_eq!(json["labels"], json!([{"key": "env", "value": "prod"}]));
        assert_eq!(json["environment_ids"], json!(["env-1"]));
        assert_eq!(json["deduplication_key"], "test-dedup-key");
    }

    #[test]
    fn test_unset_target_sends_empty_fields() {
        let attributes = NewAlert::new("s", "d", NotificationTarget::empty(), "u").attributes();
        assert_eq!(attributes["notification_target_type"], AttributeValue::from(""));
        assert_eq!(attributes["notification_target_id"], AttributeValue::from(""));
    }
}
