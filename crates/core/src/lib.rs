// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quiesce-core: lifecycle coordination for cached network resources
//!
//! This crate provides:
//! - A blocker-set state machine deciding when managed resources may
//!   perform network activity
//! - Debounced handling of the transitional "inactive" lifecycle signal
//! - An observer interface plus dispatcher for platform signal delivery

pub mod blocker;
pub mod config;
pub mod coordinator;
pub mod registry;
pub mod resource;
pub mod signal;
pub mod timer;

// Re-exports
pub use blocker::{Blocker, APP_LIFECYCLE};
pub use config::{ConfigError, CoordinatorConfig, DEFAULT_DEBOUNCE};
pub use coordinator::LifecycleCoordinator;
pub use registry::ResourceRegistry;
pub use resource::{FakeResource, Resource, ResourceCall};
pub use signal::{LifecycleObserver, PlatformSignal, SignalDispatcher};
pub use timer::InactivityTimer;
