// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocker-set transition scenarios

use quiesce_core::{
    Blocker, CoordinatorConfig, FakeResource, LifecycleCoordinator, PlatformSignal, ResourceCall,
    SignalDispatcher,
};
use std::sync::Arc;

// App-specific blocker toggles are plain call-site constructions, not
// methods on a coordinator subtype.
fn auth_blocker() -> Blocker {
    Blocker::new("auth")
}

fn maintenance_blocker() -> Blocker {
    Blocker::new("maintenance")
}

#[test]
fn blocker_sequence_dispatches_once_per_transition() {
    let resource = FakeResource::new();
    let coordinator = LifecycleCoordinator::default();
    coordinator.register_resource(Arc::new(resource.clone()));

    // Start with {app-lifecycle}; removing it empties the set
    coordinator.remove_blocker(&Blocker::app_lifecycle());
    assert_eq!(resource.count(ResourceCall::Start), 1);

    // First blocker while running stops
    coordinator.add_blocker(auth_blocker());
    assert_eq!(resource.count(ResourceCall::Stop), 1);

    // Second blocker changes membership only
    coordinator.add_blocker(maintenance_blocker());
    assert_eq!(resource.count(ResourceCall::Stop), 1);

    // Set still non-empty: no start
    coordinator.remove_blocker(&auth_blocker());
    assert_eq!(resource.count(ResourceCall::Start), 1);

    // Last blocker out: start again
    coordinator.remove_blocker(&maintenance_blocker());
    assert_eq!(resource.count(ResourceCall::Start), 2);
}

#[test]
fn every_registered_resource_sees_each_transition() {
    let first = FakeResource::new();
    let second = FakeResource::new();

    let coordinator = LifecycleCoordinator::default();
    coordinator.register_resource(Arc::new(first.clone()));
    coordinator.register_resource(Arc::new(second.clone()));

    coordinator.remove_blocker(&Blocker::app_lifecycle());
    coordinator.add_blocker(auth_blocker());

    for resource in [&first, &second] {
        assert_eq!(resource.count(ResourceCall::Start), 1);
        assert_eq!(resource.count(ResourceCall::Stop), 1);
    }
}

#[test]
fn clear_data_reaches_every_resource_exactly_once_per_call() {
    let first = FakeResource::new();
    let second = FakeResource::new();

    let coordinator = LifecycleCoordinator::new(
        CoordinatorConfig::new()
            .with_resource(Arc::new(first.clone()))
            .with_resource(Arc::new(second.clone())),
    );

    coordinator.clear_data();
    coordinator.clear_data();

    assert_eq!(first.count(ResourceCall::Clear), 2);
    assert_eq!(second.count(ResourceCall::Clear), 2);
}

#[tokio::test]
async fn platform_signals_drive_the_coordinator_through_the_dispatcher() {
    let resource = FakeResource::new();
    let coordinator = LifecycleCoordinator::default();
    coordinator.register_resource(Arc::new(resource.clone()));

    let dispatcher = SignalDispatcher::new();
    dispatcher.subscribe(Arc::new(coordinator.clone()));

    dispatcher.dispatch(PlatformSignal::Resumed);
    assert!(coordinator.is_running());
    assert_eq!(resource.count(ResourceCall::Start), 1);

    dispatcher.dispatch(PlatformSignal::Paused);
    assert!(!coordinator.is_running());
    assert_eq!(resource.count(ResourceCall::Stop), 1);

    // Detached maps to pause as well; already stopped, so no dispatch
    dispatcher.dispatch(PlatformSignal::Detached);
    assert_eq!(resource.count(ResourceCall::Stop), 1);

    // Unmapped signals are dropped
    dispatcher.dispatch(PlatformSignal::Hidden);
    assert_eq!(resource.count(ResourceCall::Stop), 1);
    assert!(!coordinator.is_running());
}

#[test]
fn config_file_supplies_debounce_and_blockers() {
    let config = CoordinatorConfig::from_toml_str(
        r#"
        debounce = "5s"
        initial_blockers = ["auth"]
        "#,
    )
    .unwrap();

    let resource = FakeResource::new();
    let coordinator =
        LifecycleCoordinator::new(config.with_resource(Arc::new(resource.clone())));

    coordinator.remove_blocker(&Blocker::app_lifecycle());
    assert!(!coordinator.is_running());

    coordinator.remove_blocker(&auth_blocker());
    assert!(coordinator.is_running());
    assert_eq!(resource.count(ResourceCall::Start), 1);
}
