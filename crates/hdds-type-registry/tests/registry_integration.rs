// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Tests panic on failure

//! Type registry integration tests
//!
//! Exercises the public API: naming scenarios, lifecycle of entries, and
//! concurrent use from several threads.

use std::sync::{Arc, Barrier};
use std::thread;

use hdds_type_registry::{
    describe, qualified_name, qualified_name_opt, RegistryConfig, RegistryError, TypeDescriptor,
    TypeKind, TypeRegistry,
};

mod pkg {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct A {
        pub id: u32,
        pub name: String,
        pub inner: B,
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct B {
        pub values: Vec<i64>,
        pub enabled: bool,
    }

    hdds_type_registry::describe!(A, B);
}

#[derive(Debug, Default)]
struct Heartbeat(u64);

describe!(Heartbeat);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_pointer_and_value_coexist() {
    init_logging();
    let reg = TypeRegistry::new();

    reg.register(&pkg::A::default()).unwrap();
    reg.register(&Box::new(pkg::A::default())).unwrap();

    let plain = qualified_name(&pkg::A::default());
    let pointer = qualified_name(&Box::new(pkg::A::default()));
    assert!(plain.ends_with("::pkg/A"), "got {}", plain);
    assert_eq!(pointer, format!("*{}", plain));
    assert_eq!(reg.registered_names(), vec![pointer.clone(), plain.clone()]);

    let value = reg.get_value(&plain).unwrap().downcast::<pkg::A>().unwrap();
    assert_eq!(value, pkg::A::default());
    assert!(value.inner.values.is_empty());

    reg.unregister(&plain).unwrap();
    assert_eq!(reg.get_type(&plain), Err(RegistryError::NotFound(plain)));
    assert!(reg.get_type(&pointer).is_ok());
}

#[test]
fn test_distinct_pointer_types_do_not_collide() {
    init_logging();
    let reg = TypeRegistry::new();

    reg.register(&pkg::A::default()).unwrap();
    reg.register(&Some(Box::new(pkg::A::default()))).unwrap();
    reg.register(&Box::new(pkg::A::default())).unwrap();
    reg.register(&Arc::new(pkg::A::default())).unwrap();
    assert_eq!(reg.len(), 4);

    let pointer = qualified_name(&Box::new(pkg::A::default()));
    assert!(pointer.starts_with('*'), "got {}", pointer);
    assert!(reg.get_value(&pointer).unwrap().is::<Box<pkg::A>>());

    let nullable = qualified_name(&Some(Box::new(pkg::A::default())));
    assert_ne!(nullable, pointer);
    let value = reg.get_value(&nullable).unwrap();
    assert_eq!(value.downcast::<Option<Box<pkg::A>>>().unwrap(), None);
}

#[test]
fn test_empty_name_leaves_registry_empty() {
    init_logging();
    let reg = TypeRegistry::new();
    assert_eq!(
        reg.register_named("", &pkg::B::default()),
        Err(RegistryError::InvalidParameter("empty name"))
    );
    assert!(reg.registered_names().is_empty());
}

#[test]
fn test_duplicate_keeps_first_descriptor() {
    let reg = TypeRegistry::new();
    reg.register_named("payload", &pkg::A::default()).unwrap();
    let err = reg.register_named("payload", &Heartbeat::default()).unwrap_err();
    assert_eq!(err.name(), Some("payload"));
    assert_eq!(
        reg.get_type("payload").unwrap(),
        TypeDescriptor::of::<pkg::A>()
    );
}

#[test]
fn test_removal_is_complete() {
    let reg = TypeRegistry::new();
    reg.register_named("hb", &Heartbeat::default()).unwrap();
    reg.unregister("hb").unwrap();

    assert!(matches!(reg.get_type("hb"), Err(RegistryError::NotFound(_))));
    assert!(matches!(reg.get_value("hb"), Err(RegistryError::NotFound(_))));
    assert!(matches!(reg.get_interface("hb"), Err(RegistryError::NotFound(_))));
    assert!(matches!(reg.unregister("hb"), Err(RegistryError::NotFound(_))));
    assert!(!reg.registered_names().contains(&"hb".to_string()));
}

#[test]
fn test_registry_usable_after_errors() {
    let reg = TypeRegistry::new();
    let _ = reg.unregister("nothing");
    let _ = reg.register_named("", &0i32);
    let _ = reg.get_value("nothing");

    reg.register_named("n", &0i32).unwrap();
    assert_eq!(reg.get_interface("n").unwrap().downcast_ref::<i32>(), Some(&0));
}

#[test]
fn test_name_generation_cases() {
    assert_eq!(qualified_name_opt(None), "");
    assert_eq!(qualified_name(&0i32), "i32");
    assert_eq!(qualified_name(&0u64), "u64");
    assert_eq!(
        qualified_name(&Heartbeat(1)),
        qualified_name(&Heartbeat(99))
    );
    assert_eq!(
        qualified_name(&Box::new(Box::new(Heartbeat(0)))),
        format!("**{}", qualified_name(&Heartbeat(0)))
    );
}

#[test]
fn test_wire_tag_dispatch() {
    let reg = TypeRegistry::with_config(RegistryConfig::builder().label("wire").build());
    reg.register_named("0x01", &pkg::A::default()).unwrap();
    reg.register_named("0x02", &Heartbeat::default()).unwrap();
    reg.register_factory("0x03", || Heartbeat(u64::MAX)).unwrap();

    for (tag, expect_heartbeat) in [("0x01", false), ("0x02", true), ("0x03", true)] {
        let value = reg.get_value(tag).unwrap();
        assert_eq!(value.is::<Heartbeat>(), expect_heartbeat, "tag {}", tag);
        assert_eq!(value.descriptor().kind(), TypeKind::Named);
    }

    let hb = reg.get_value("0x03").unwrap().downcast::<Heartbeat>().unwrap();
    assert_eq!(hb.0, u64::MAX);
}

#[test]
fn test_concurrent_registration() {
    init_logging();
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let reg = Arc::new(TypeRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let reg = Arc::clone(&reg);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..PER_THREAD {
                    let name = format!("t{:02}-{:03}", t, i);
                    reg.register_named(&name, &pkg::B::default()).unwrap();
                    assert!(reg.get_value(&name).unwrap().is::<pkg::B>());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let names = reg.registered_names();
    assert_eq!(names.len(), THREADS * PER_THREAD);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_concurrent_duplicates_single_winner() {
    const THREADS: usize = 16;

    let reg = Arc::new(TypeRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                reg.register(&Heartbeat::default()).is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(reg.len(), 1);
}
