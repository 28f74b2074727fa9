// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors and the values they construct.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use crate::describe::{Describe, TypeKind};
use crate::naming::qualify_type_path;

/// Type-erased value produced by a descriptor.
pub type AnyValue = Box<dyn Any + Send + Sync>;

type Factory = dyn Fn() -> AnyValue + Send + Sync;

// ---------------------------------------------------------------------------
// TypeDescriptor
// ---------------------------------------------------------------------------

/// Opaque runtime handle for a type.
///
/// Identifies the type (by `TypeId`), exposes its kind and layout, and can
/// construct fresh instances of it. Cloning is cheap: the constructor is
/// shared. Two descriptors are equal when they describe the same type, even
/// if they were built with different constructors.
#[derive(Clone)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    kind: TypeKind,
    size: usize,
    align: usize,
    factory: Arc<Factory>,
}

impl TypeDescriptor {
    /// Descriptor for `T`, constructing zero values with `T::default()`.
    pub fn of<T>() -> Self
    where
        T: Describe + Default + Any + Send + Sync,
    {
        Self::with_factory(T::default)
    }

    /// Descriptor for `T`, constructing values with `factory`.
    ///
    /// Use this for types without a `Default` impl, or when the "empty"
    /// instance is not the derived default.
    pub fn with_factory<T, F>(factory: F) -> Self
    where
        T: Describe + Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        TypeDescriptor {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            kind: T::type_kind(),
            size: mem::size_of::<T>(),
            align: mem::align_of::<T>(),
            factory: Arc::new(move || Box::new(factory()) as AnyValue),
        }
    }

    /// `TypeId` of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Full Rust path of the described type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type path in `<module-path>/<type-name>` form, without pointer markers.
    pub fn qualified_type_name(&self) -> String {
        qualify_type_path(self.type_name)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// `size_of` the described type.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `align_of` the described type.
    pub fn align(&self) -> usize {
        self.align
    }

    /// Whether this descriptor describes `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Construct a new instance, type-erased.
    pub fn construct(&self) -> AnyValue {
        (self.factory)()
    }

    /// Construct a new instance as a [`Value`] carrying this descriptor.
    pub fn new_value(&self) -> Value {
        Value {
            inner: self.construct(),
            descriptor: self.clone(),
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("align", &self.align)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A constructed instance together with the descriptor that produced it.
pub struct Value {
    descriptor: TypeDescriptor,
    inner: AnyValue,
}

impl Value {
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Whether the held value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.inner.downcast_mut::<T>()
    }

    /// Take the held value as a `T`, or get `self` back on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        let Value { descriptor, inner } = self;
        match inner.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Value { descriptor, inner }),
        }
    }

    /// Drop the descriptor and keep the type-erased value.
    pub fn into_any(self) -> AnyValue {
        self.inner
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type_name", &self.descriptor.type_name)
            .finish_non_exhaustive()
    }
}
