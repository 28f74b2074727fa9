// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Default label used in log lines.
pub const DEFAULT_LABEL: &str = "types";

/// Settings for a [`TypeRegistry`](crate::TypeRegistry).
///
/// Deserializable so an embedding application can keep it in its own
/// configuration file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Tag prepended to log lines, to tell several registries apart.
    pub label: String,
    /// Number of entries to pre-allocate.
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            capacity: 0,
        }
    }
}

impl RegistryConfig {
    /// Create a new builder.
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }
}

/// Builder for RegistryConfig.
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    label: Option<String>,
    capacity: Option<usize>,
}

impl RegistryConfigBuilder {
    /// Set the log label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RegistryConfig {
        let defaults = RegistryConfig::default();
        RegistryConfig {
            label: self.label.unwrap_or(defaults.label),
            capacity: self.capacity.unwrap_or(defaults.capacity),
        }
    }
}
