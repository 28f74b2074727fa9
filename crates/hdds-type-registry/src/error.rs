// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for registry operations.

use thiserror::Error;

/// Errors produced by the type registry.
///
/// Every error is local to the failing call: the registry is left exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No entry is registered under the given name.
    #[error("entry '{0}' not found")]
    NotFound(String),
    /// An entry is already registered under the given name.
    #[error("entry '{0}' already exists")]
    DuplicateEntry(String),
    /// A registration argument was rejected (e.g. an empty name).
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

impl RegistryError {
    /// Name the error refers to, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            RegistryError::NotFound(name) | RegistryError::DuplicateEntry(name) => Some(name),
            RegistryError::InvalidParameter(_) => None,
        }
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
