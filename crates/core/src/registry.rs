// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, duplicate-free registry of managed resources

use crate::resource::Resource;
use std::sync::Arc;

/// Ordered collection of registered resources
///
/// Registration order is preserved and determines dispatch order for
/// start/stop/clear. Duplicate suppression is by handle identity, not
/// type: the same `Arc` registered twice is stored once, while two
/// separately constructed resources are distinct even if equal.
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    resources: Vec<Arc<dyn Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Add a resource if this exact handle is not already registered
    ///
    /// Never fails; re-registering a handle is a no-op. There is no
    /// removal operation.
    pub fn register(&mut self, resource: Arc<dyn Resource>) {
        if self.resources.iter().any(|r| Arc::ptr_eq(r, &resource)) {
            return;
        }
        self.resources.push(resource);
    }

    /// Iterate resources in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Resource>> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
