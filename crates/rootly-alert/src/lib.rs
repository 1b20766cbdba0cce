//! Create Rootly alerts from CI workflows.
//!
//! Workflow inputs name people, services, groups, policies and environments
//! by their display names. This crate resolves those names to Rootly
//! identifiers through the REST API, assembles the alert payload and creates
//! the alert.
//!
//! ## Failure model
//!
//! Lookups and alert creation are best-effort: a missing entity or a failed
//! request is reported through a [`Diagnostics`] sink and yields an empty
//! identifier. The only hard error is an unknown notification target type.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rootly_alert::{NewAlert, NotificationTarget, RootlyClient, TracingDiagnostics};
//!
//! # async fn example() -> Result<(), rootly_alert::AlertError> {
//! let client = RootlyClient::new("api-key", Arc::new(TracingDiagnostics))?;
//!
//! let target = NotificationTarget::resolve(&client, "user", "oncall@example.com").await?;
//! let urgency = client.alert_urgency_id("High").await;
//!
//! let alert = NewAlert::new("Deploy failed", "main is red", target, urgency)
//!     .service_ids(vec![client.service_id("checkout").await]);
//! let alert_id = client.create_alert(&alert).await;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod alert;
pub mod attributes;
pub mod client;
pub mod diagnostics;
pub mod error;
pub mod labels;
pub mod models;
pub mod output;
pub mod resolvers;
pub mod target;

pub use action::{run_action, ActionInputs, DEFAULT_ALERT_URGENCY};
pub use alert::NewAlert;
pub use attributes::{attach_non_blank, AttributeMap, AttributeValue};
pub use client::{RootlyApi, RootlyClient, API_BASE_URL};
pub use diagnostics::{Diagnostics, Level, RecordingDiagnostics, TracingDiagnostics, WorkflowCommands};
pub use error::AlertError;
pub use labels::{format_labels, parse_labels, Label};
pub use output::{ActionOutput, ALERT_ID_OUTPUT};
pub use resolvers::EntityKind;
pub use target::{NotificationTarget, TargetKind};
