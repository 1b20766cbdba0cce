//! Notification target resolution.

mod common;

use common::{FakeApi, MISSING};
use rootly_alert::{AlertError, EntityKind, NotificationTarget, TargetKind};

fn casings(tag: &str) -> [String; 4] {
    let alternating = tag
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    [
        tag.to_string(),
        tag.to_lowercase(),
        tag.to_uppercase(),
        alternating,
    ]
}

#[tokio::test]
async fn test_resolves_every_kind_in_every_casing() {
    let api = FakeApi::default();
    for kind in TargetKind::ALL {
        for tag in casings(kind.as_str()) {
            let target = NotificationTarget::resolve(&api, &tag, "target-name")
                .await
                .unwrap();
            assert_eq!(target.type_label(), kind.as_str(), "{tag}");
            assert_eq!(target.id, FakeApi::id_for(kind.entity()), "{tag}");
        }
    }

    let lookups = api.lookups();
    assert_eq!(lookups.len(), 16);
    assert!(lookups.iter().all(|(_, name)| name == "target-name"));
}

#[tokio::test]
async fn test_dispatches_to_matching_lookup() {
    let api = FakeApi::default();
    NotificationTarget::resolve(&api, "escalationpolicy", "primary").await.unwrap();
    NotificationTarget::resolve(&api, "group", "infra").await.unwrap();

    assert_eq!(
        api.lookups(),
        vec![
            (EntityKind::EscalationPolicy, "primary".to_string()),
            (EntityKind::Group, "infra".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_rejects_empty_or_unknown_type() {
    let api = FakeApi::default();
    for tag in ["", "invalid", "team"] {
        let err = NotificationTarget::resolve(&api, tag, "someone")
            .await
            .unwrap_err();
        assert!(matches!(err, AlertError::InvalidTargetType));
        assert_eq!(err.to_string(), "Invalid notification target type");
    }
    assert!(api.lookups().is_empty());
}

#[tokio::test]
async fn test_unresolved_name_keeps_kind() {
    let api = FakeApi::default();
    let target = NotificationTarget::resolve(&api, "User", MISSING).await.unwrap();
    assert_eq!(target.id, "");
    assert_eq!(target.kind, Some(TargetKind::User));
    assert!(!target.is_empty());
}

#[tokio::test]
async fn test_with_resolved_id_uses_stored_kind() {
    let api = FakeApi::default();
    let stored = NotificationTarget::new(TargetKind::Service, "old-id");

    let updated = stored.with_resolved_id(&api, "checkout").await.unwrap();
    assert_eq!(updated, NotificationTarget::new(TargetKind::Service, "service-789"));
    assert_eq!(stored.id, "old-id");
    assert_eq!(api.lookups(), vec![(EntityKind::Service, "checkout".to_string())]);
}

#[tokio::test]
async fn test_with_resolved_id_dispatches_every_kind() {
    let api = FakeApi::default();
    for kind in TargetKind::ALL {
        let stored = NotificationTarget::new(kind, "stale-id");
        let updated = stored.with_resolved_id(&api, "on-call").await.unwrap();
        assert_eq!(updated, NotificationTarget::new(kind, FakeApi::id_for(kind.entity())));
    }

    let kinds: Vec<EntityKind> = api.lookups().into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        TargetKind::ALL.iter().map(|kind| kind.entity()).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_with_resolved_id_requires_kind() {
    let api = FakeApi::default();
    let err = NotificationTarget::empty()
        .with_resolved_id(&api, "someone")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid notification target type");
    assert!(api.lookups().is_empty());
}
