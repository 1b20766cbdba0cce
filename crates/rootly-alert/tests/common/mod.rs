//! Shared test helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rootly_alert::{EntityKind, NewAlert, RecordingDiagnostics, RootlyApi, RootlyClient};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Name the fake API treats as unknown.
pub const MISSING: &str = "missing";

/// In-memory Rootly API recording every call.
#[derive(Default)]
pub struct FakeApi {
    pub lookups: Mutex<Vec<(EntityKind, String)>>,
    pub alerts: Mutex<Vec<NewAlert>>,
}

impl FakeApi {
    pub fn id_for(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::User => "user-303",
            EntityKind::Service => "service-789",
            EntityKind::Group => "group-101",
            EntityKind::EscalationPolicy => "policy-404",
            EntityKind::AlertUrgency => "urgency-456",
            EntityKind::Environment => "env-202",
        }
    }

    pub fn lookups(&self) -> Vec<(EntityKind, String)> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn lookups_of(&self, kind: EntityKind) -> Vec<String> {
        self.lookups()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, name)| name)
            .collect()
    }

    pub fn alerts(&self) -> Vec<NewAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl RootlyApi for FakeApi {
    async fn resolve_id(&self, kind: EntityKind, name: &str) -> String {
        self.lookups.lock().unwrap().push((kind, name.to_string()));
        if name == MISSING {
            String::new()
        } else {
            Self::id_for(kind).to_string()
        }
    }

    async fn create_alert(&self, alert: &NewAlert) -> String {
        self.alerts.lock().unwrap().push(alert.clone());
        "alert-123".to_string()
    }
}

/// A client pointed at `server`, recording its diagnostics.
pub fn client_for(server: &MockServer) -> (RootlyClient, Arc<RecordingDiagnostics>) {
    client_at(&server.uri())
}

/// A client pointed at `base_url`, recording its diagnostics.
pub fn client_at(base_url: &str) -> (RootlyClient, Arc<RecordingDiagnostics>) {
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let client = RootlyClient::with_base_url(base_url, API_KEY, diagnostics.clone())
        .expect("client should build");
    (client, diagnostics)
}

/// Base URL nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";
