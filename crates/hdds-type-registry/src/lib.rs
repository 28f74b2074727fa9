// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type registry for HDDS.
//!
//! Maps names to type descriptors so that code which only knows a name
//! (a wire-level type tag, a plugin key from a config file) can obtain the
//! type's descriptor or a freshly constructed zero value of it.
//!
//! # Features
//!
//! - **Registration**: by explicit name, or under the type's qualified name
//!   (`module/Type`, with one marker per pointer level: `*` for `Box`)
//! - **Construction**: zero values via `Default`, or caller-supplied factories
//! - **Enumeration**: sorted listing of registered names
//! - **Thread safety**: one `parking_lot::Mutex` around the whole map
//!
//! # Example
//!
//! ```rust
//! use hdds_type_registry::{describe, qualified_name, TypeRegistry};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Temperature {
//!     celsius: f32,
//! }
//! describe!(Temperature);
//!
//! let registry = TypeRegistry::new();
//! registry.register(&Temperature::default())?;
//! registry.register_named("temp", &Temperature::default())?;
//!
//! let name = qualified_name(&Temperature::default());
//! assert!(registry.get_type(&name)?.is::<Temperature>());
//!
//! let sample = registry.get_value("temp")?.downcast::<Temperature>().unwrap();
//! assert_eq!(sample, Temperature::default());
//! # Ok::<(), hdds_type_registry::RegistryError>(())
//! ```

pub mod config;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod registry;

pub use config::{RegistryConfig, RegistryConfigBuilder};
pub use describe::{Describe, Indirection, TypeKind};
pub use descriptor::{AnyValue, TypeDescriptor, Value};
pub use error::{RegistryError, Result};
pub use naming::{
    indirection_depth, qualified_name, qualified_name_opt, qualify_type_path, INDIRECTION_MARKER,
    MUT_REF_MARKER, NULLABLE_BOX_MARKER, NULLABLE_REF_MARKER, REF_MARKER,
};
pub use registry::{global, TypeRegistry};
