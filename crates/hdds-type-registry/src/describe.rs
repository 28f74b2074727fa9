// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime shape of a value, as seen by the qualified-name generator.
//!
//! Rust has no reflection, so a type opts in by implementing [`Describe`].
//! Plain types only need an empty impl (or the [`describe!`](crate::describe)
//! macro); pointer types report the value they point to through
//! [`Describe::indirection`], which is what lets `Box<Sensor>` be named
//! `*module/Sensor`.

use std::any::type_name;
use std::rc::Rc;
use std::sync::Arc;

use crate::naming::{
    INDIRECTION_MARKER, MUT_REF_MARKER, NULLABLE_BOX_MARKER, NULLABLE_REF_MARKER, REF_MARKER,
};

/// Broad category of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Built-in type without a module path (`i32`, `bool`, `()`).
    Primitive,
    /// Type declared in a module (`sensor_msgs::Imu`, `alloc::string::String`).
    Named,
    /// Pointer-like wrapper (`Box<T>`, `&T`, `Arc<T>`, `Option<Box<T>>`, ...).
    Indirection,
}

impl TypeKind {
    /// Classify a non-pointer type from its `std::any::type_name` path.
    pub fn from_path(path: &str) -> Self {
        if path.contains("::") {
            TypeKind::Named
        } else {
            TypeKind::Primitive
        }
    }
}

/// One step of pointer traversal.
#[derive(Clone, Copy)]
pub enum Indirection<'a> {
    /// The value is not a pointer.
    Direct,
    /// The value is a pointer whose target is present.
    Target(&'a dyn Describe),
    /// The value is a pointer whose target is absent.
    Null,
}

impl std::fmt::Debug for Indirection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indirection::Direct => write!(f, "Direct"),
            Indirection::Target(target) => write!(f, "Target({})", target.type_path()),
            Indirection::Null => write!(f, "Null"),
        }
    }
}

/// Types whose name can be derived at runtime.
///
/// The defaults describe a plain, non-pointer type named after its
/// `std::any::type_name`. Pointer wrappers override `indirection`,
/// `indirection_marker` and `type_kind`.
pub trait Describe {
    /// Pointer step for this value.
    fn indirection(&self) -> Indirection<'_> {
        Indirection::Direct
    }

    /// Prefix added to the name when [`indirection`](Self::indirection)
    /// returns a target. Each pointer type should use its own marker so that
    /// distinct pointer types never derive the same name.
    fn indirection_marker(&self) -> &'static str {
        INDIRECTION_MARKER
    }

    /// Full static type path of this value's type.
    fn type_path(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Category of the implementing type.
    fn type_kind() -> TypeKind
    where
        Self: Sized,
    {
        TypeKind::from_path(type_name::<Self>())
    }
}

/// Implement [`Describe`] with the default (non-pointer) behaviour.
///
/// ```rust
/// use hdds_type_registry::{describe, qualified_name};
///
/// #[derive(Default)]
/// struct Temperature {
///     celsius: f32,
/// }
///
/// describe!(Temperature);
///
/// assert!(qualified_name(&Temperature::default()).ends_with("/Temperature"));
/// ```
#[macro_export]
macro_rules! describe {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Describe for $ty {})+
    };
}

describe!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<T> Describe for Vec<T> {}

// `Arc`/`Rc` share ownership rather than point at a fresh value, so they are
// named by their own path (`alloc::sync/Arc<..>`) instead of a marker.
impl<T> Describe for Arc<T> {
    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T> Describe for Rc<T> {
    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T: Describe> Describe for Box<T> {
    fn indirection(&self) -> Indirection<'_> {
        Indirection::Target(&**self)
    }

    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T: Describe> Describe for Option<Box<T>> {
    fn indirection(&self) -> Indirection<'_> {
        match self {
            Some(ptr) => Indirection::Target(&**ptr),
            None => Indirection::Null,
        }
    }

    fn indirection_marker(&self) -> &'static str {
        NULLABLE_BOX_MARKER
    }

    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T: Describe> Describe for &T {
    fn indirection(&self) -> Indirection<'_> {
        Indirection::Target(*self)
    }

    fn indirection_marker(&self) -> &'static str {
        REF_MARKER
    }

    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T: Describe> Describe for &mut T {
    fn indirection(&self) -> Indirection<'_> {
        Indirection::Target(&**self)
    }

    fn indirection_marker(&self) -> &'static str {
        MUT_REF_MARKER
    }

    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}

impl<T: Describe> Describe for Option<&T> {
    fn indirection(&self) -> Indirection<'_> {
        match self {
            Some(target) => Indirection::Target(*target),
            None => Indirection::Null,
        }
    }

    fn indirection_marker(&self) -> &'static str {
        NULLABLE_REF_MARKER
    }

    fn type_kind() -> TypeKind {
        TypeKind::Indirection
    }
}
