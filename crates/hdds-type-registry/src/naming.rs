// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Qualified-name generation.
//!
//! A qualified name is `<module-path>/<type-name>` for a type declared in a
//! module, or the bare type name for a built-in type, prefixed with one
//! marker per pointer that was followed to reach the value. Every pointer
//! type has its own marker, so distinct types never share a name:
//!
//! ```text
//! 42i32                        -> "i32"
//! Imu::default()               -> "sensor_msgs::msg/Imu"
//! Box::new(Imu::default())     -> "*sensor_msgs::msg/Imu"
//! Box::new(Box::new(0u8))      -> "**u8"
//! Some(Box::new(0u8))          -> "?*u8"
//! &imu                         -> "&sensor_msgs::msg/Imu"
//! Arc::new(0u8)                -> "alloc::sync/Arc<u8>"
//! None::<Box<Imu>>             -> "core::option/Option<alloc::boxed::Box<sensor_msgs::msg::Imu>>"
//! ```
//!
//! Traversal stops at the first absent pointer target; the pointer type is
//! then named as is. Names are derived from `std::any::type_name`, so they
//! are stable within one build but not a cross-compiler wire format.

use crate::describe::{Describe, Indirection};

/// Marker for an owning pointer (`Box<T>`), and the default for
/// caller-defined pointer types.
pub const INDIRECTION_MARKER: &str = "*";

/// Marker for a present `Option<Box<T>>`.
pub const NULLABLE_BOX_MARKER: &str = "?*";

/// Marker for a shared reference.
pub const REF_MARKER: &str = "&";

/// Marker for a present `Option<&T>`.
pub const NULLABLE_REF_MARKER: &str = "?&";

/// Marker for an exclusive reference.
pub const MUT_REF_MARKER: &str = "&mut ";

/// Separator between the module path and the type name.
pub const PATH_SEPARATOR: char = '/';

/// Canonical name of `value`'s type.
pub fn qualified_name(value: &dyn Describe) -> String {
    let mut prefix = String::new();
    let mut current = value;

    while let Indirection::Target(target) = current.indirection() {
        prefix.push_str(current.indirection_marker());
        current = target;
    }

    prefix.push_str(&qualify_type_path(current.type_path()));
    prefix
}

/// Like [`qualified_name`], but an absent value yields the empty string.
pub fn qualified_name_opt(value: Option<&dyn Describe>) -> String {
    value.map(qualified_name).unwrap_or_default()
}

/// Number of pointers [`qualified_name`] follows before reaching a
/// non-pointer value or an absent target.
pub fn indirection_depth(value: &dyn Describe) -> usize {
    let mut depth = 0;
    let mut current = value;
    while let Indirection::Target(target) = current.indirection() {
        depth += 1;
        current = target;
    }
    depth
}

/// Turn a Rust type path into `<module-path>/<type-name>`.
///
/// The split happens at the last `::` before any generic argument list, so
/// `alloc::vec::Vec<a::B>` becomes `alloc::vec/Vec<a::B>`. Paths without a
/// module (`i32`), paths not starting with an identifier (`[u8; 4]`,
/// tuples, references) and function-pointer or trait-object types
/// (`fn(i32) -> a::B`, `dyn core::any::Any`) are returned unchanged.
pub fn qualify_type_path(path: &str) -> String {
    let starts_with_ident = path
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_');
    if !starts_with_ident || is_type_form(path) {
        return path.to_string();
    }

    let head_end = path.find('<').unwrap_or(path.len());
    match path[..head_end].rfind("::") {
        Some(idx) => format!("{}{}{}", &path[..idx], PATH_SEPARATOR, &path[idx + 2..]),
        None => path.to_string(),
    }
}

/// Type syntax that starts with a keyword rather than a path.
fn is_type_form(path: &str) -> bool {
    const PREFIXES: [&str; 6] = ["fn(", "dyn ", "impl ", "unsafe ", "extern ", "for<"];
    PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
