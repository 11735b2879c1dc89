// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading breakpoint tables and responsive values from configuration.

#![cfg(feature = "serde")]

use understory_breakpoints::{Breakpoint, BreakpointSet, BreakpointTable, Responsive, TableError};

#[test]
fn table_loads_from_named_thresholds() {
    let json = r#"{ "sm": 576, "md": 768, "lg": 992, "xl": 1200, "xxl": 1400 }"#;
    let table: BreakpointTable = serde_json::from_str(json).unwrap();
    assert_eq!(table.classify(1000.0), Breakpoint::Lg);
    assert_eq!(table.min_width(Breakpoint::Xxl), 1400.0);
}

#[test]
fn table_accepts_tailwind_2xl_key() {
    let json = r#"{ "sm": 640, "md": 768, "lg": 1024, "xl": 1280, "2xl": 1536 }"#;
    let table: BreakpointTable = serde_json::from_str(json).unwrap();
    assert_eq!(table, BreakpointTable::TAILWIND);
}

#[test]
fn invalid_table_is_rejected_with_table_error_message() {
    let json = r#"{ "sm": 640, "md": 600, "lg": 1024, "xl": 1280, "xxl": 1536 }"#;
    let err = serde_json::from_str::<BreakpointTable>(json).unwrap_err();
    let expected = TableError::NotIncreasing {
        tier: Breakpoint::Md,
        value: 600.0,
        previous: 640.0,
    }
    .to_string();
    assert!(
        err.to_string().contains(&expected),
        "unexpected error: {err}"
    );
}

#[test]
fn table_serializes_as_thresholds() {
    let value = serde_json::to_value(BreakpointTable::TAILWIND).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "sm": 640.0, "md": 768.0, "lg": 1024.0, "xl": 1280.0, "xxl": 1536.0 })
    );
}

#[test]
fn responsive_values_omit_unset_tiers() {
    let values = Responsive::new(8).sm(16).xl(32);
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"{"initial":8,"sm":16,"xl":32}"#);

    let back: Responsive<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
    assert_eq!(*back.resolve(2000.0), 32);
}

#[test]
fn responsive_requires_initial() {
    assert!(serde_json::from_str::<Responsive<i32>>(r#"{"sm":16}"#).is_err());
}

#[test]
fn breakpoint_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&Breakpoint::Xxl).unwrap(), r#""xxl""#);
    let tier: Breakpoint = serde_json::from_str(r#""md""#).unwrap();
    assert_eq!(tier, Breakpoint::Md);
    let tier: Breakpoint = serde_json::from_str(r#""2xl""#).unwrap();
    assert_eq!(tier, Breakpoint::Xxl);
}

#[test]
fn sets_use_flag_names() {
    let set = BreakpointSet::SM | BreakpointSet::LG;
    let json = serde_json::to_string(&set).unwrap();
    let back: BreakpointSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
