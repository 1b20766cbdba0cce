//! Rootly API models.
//!
//! Rootly speaks JSON:API; only the identifiers of returned resources are
//! consumed here.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;

// ============================================================================
// Common JSON:API wrapper types
// ============================================================================

/// JSON:API response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
}

/// JSON:API collection response. `data` may be missing on odd responses.
#[derive(Debug, Deserialize)]
pub struct ApiListResponse<T> {
    /// Response data.
    pub data: Option<Vec<T>>,
}

/// Any resource, reduced to its identifier.
#[derive(Debug, Deserialize)]
pub struct ResourceId {
    /// Resource ID.
    pub id: String,
}

// ============================================================================
// Alert types
// ============================================================================

/// Resource type of alerts.
pub const ALERTS_RESOURCE_TYPE: &str = "alerts";

/// Request body for creating an alert.
#[derive(Debug, Serialize)]
pub struct CreateAlertBody {
    /// Request data.
    pub data: CreateAlertData,
}

/// Create alert data wrapper.
#[derive(Debug, Serialize)]
pub struct CreateAlertData {
    /// Resource type (always `alerts`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Alert attributes.
    pub attributes: AttributeMap,
}

impl CreateAlertBody {
    /// Wrap alert attributes in the JSON:API envelope.
    #[must_use]
    pub fn new(attributes: AttributeMap) -> Self {
        Self {
            data: CreateAlertData {
                resource_type: ALERTS_RESOURCE_TYPE.to_string(),
                attributes,
            },
        }
    }
}
