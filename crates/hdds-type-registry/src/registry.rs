// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::any::Any;
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::config::RegistryConfig;
use crate::describe::Describe;
use crate::descriptor::{AnyValue, TypeDescriptor, Value};
use crate::error::{RegistryError, Result};
use crate::naming::qualified_name;

// ---------------------------------------------------------------------------
// TypeRegistry
// ---------------------------------------------------------------------------

/// Thread-safe map from names to type descriptors.
///
/// All operations take the same lock for their whole critical section, so
/// the registry can be shared between threads (e.g. behind an `Arc` or as a
/// `static`) without further coordination. Values are constructed after the
/// descriptor has been copied out, so a factory may itself use the registry.
pub struct TypeRegistry {
    label: String,
    entries: Mutex<HashMap<String, TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry from `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        TypeRegistry {
            label: config.label,
            entries: Mutex::new(HashMap::with_capacity(config.capacity)),
        }
    }

    /// Label used in log lines.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register the type of `value` under its qualified name.
    ///
    /// The name is derived with [`qualified_name`] while the lock is held, so
    /// `Box<Sensor>` registers as `*module/Sensor` and `Sensor` as
    /// `module/Sensor`.
    pub fn register<T>(&self, value: &T) -> Result<()>
    where
        T: Describe + Default + Any + Send + Sync,
    {
        let mut entries = self.entries.lock();
        let name = qualified_name(value);
        self.insert(&mut entries, name, TypeDescriptor::of::<T>())
    }

    /// Register the type of `value` under its qualified name, constructing
    /// instances with `factory`. For types without a `Default` impl.
    pub fn register_with<T, F>(&self, value: &T, factory: F) -> Result<()>
    where
        T: Describe + Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let mut entries = self.entries.lock();
        let name = qualified_name(value);
        self.insert(&mut entries, name, TypeDescriptor::with_factory(factory))
    }

    /// Register the type of `value` under `name`.
    pub fn register_named<T>(&self, name: &str, _value: &T) -> Result<()>
    where
        T: Describe + Default + Any + Send + Sync,
    {
        self.register_descriptor(name, TypeDescriptor::of::<T>())
    }

    /// Register `T` under `name`, constructing instances with `factory`.
    pub fn register_factory<T, F>(&self, name: &str, factory: F) -> Result<()>
    where
        T: Describe + Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register_descriptor(name, TypeDescriptor::with_factory(factory))
    }

    /// Register an existing descriptor under `name`.
    pub fn register_descriptor(&self, name: &str, descriptor: TypeDescriptor) -> Result<()> {
        let mut entries = self.entries.lock();
        self.insert(&mut entries, name.to_string(), descriptor)
    }

    fn insert(
        &self,
        entries: &mut HashMap<String, TypeDescriptor>,
        name: String,
        descriptor: TypeDescriptor,
    ) -> Result<()> {
        if name.is_empty() {
            log::debug!("[{}] rejected registration with empty name", self.label);
            return Err(RegistryError::InvalidParameter("empty name"));
        }
        if entries.contains_key(&name) {
            log::debug!("[{}] duplicate registration of '{}'", self.label, name);
            return Err(RegistryError::DuplicateEntry(name));
        }

        log::debug!(
            "[{}] registered '{}' as {}",
            self.label,
            name,
            descriptor.type_name()
        );
        entries.insert(name, descriptor);
        Ok(())
    }

    /// Remove the entry registered under `name`.
    pub fn unregister(&self, name: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        match entries.remove(name) {
            Some(_) => {
                log::debug!("[{}] unregistered '{}'", self.label, name);
                Ok(())
            }
            None => Err(RegistryError::NotFound(name.to_string())),
        }
    }

    /// Descriptor registered under `name`.
    pub fn get_type(&self, name: &str) -> Result<TypeDescriptor> {
        let entries = self.entries.lock();
        log::trace!("[{}] lookup '{}'", self.label, name);
        entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// New zero-valued instance of the type registered under `name`.
    ///
    /// The lock is released before the instance is constructed.
    pub fn get_value(&self, name: &str) -> Result<Value> {
        Ok(self.get_type(name)?.new_value())
    }

    /// Like [`get_value`](Self::get_value), but type-erased. Also constructs
    /// after releasing the lock.
    pub fn get_interface(&self, name: &str) -> Result<AnyValue> {
        Ok(self.get_type(name)?.construct())
    }

    /// All registered names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let entries = self.entries.lock();
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.lock().contains_key(name)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("label", &self.label)
            .field("names", &self.registered_names())
            .finish()
    }
}

/// Process-wide registry, created empty on first use.
///
/// Nothing in this crate uses it; it exists for applications that prefer a
/// single shared instance over passing one around.
pub fn global() -> &'static TypeRegistry {
    static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        TypeRegistry::with_config(RegistryConfig::builder().label("global").build())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
