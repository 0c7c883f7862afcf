//! Property-based tests for the primitive bridge and construction.
//!
//! Random literal sets and field values check that:
//! 1. every literal finds its own variant and nothing else
//! 2. a repeated literal is always rejected at registration
//! 3. construction is equal-by-value and never identity-sharing

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeSet;

use adt_diagnostic::ErrorCode;
use adt_eval::{bridge, BackingKind, FieldType, Literal, Runtime, Value};
use proptest::prelude::*;

fn int_backed(rt: &Runtime, literals: &[i64]) {
    let mut decl = rt.declare("Code").backed(BackingKind::Int);
    for (i, literal) in literals.iter().enumerate() {
        decl = decl.literal(&format!("V{i}"), *literal);
    }
    rt.register(decl.build()).unwrap();
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").expect("valid regex")
}

proptest! {
    #[test]
    fn int_literals_round_trip(
        literals in prop::collection::btree_set(any::<i64>(), 1..16),
        probe in any::<i64>(),
    ) {
        let literals: Vec<i64> = literals.into_iter().collect();
        let rt = Runtime::new();
        int_backed(&rt, &literals);

        for (i, literal) in literals.iter().enumerate() {
            let value = rt.from_primitive("Code", *literal).unwrap();
            prop_assert_eq!(value.ordinal(), i);
            prop_assert_eq!(rt.to_primitive(&value).unwrap(), Literal::Int(*literal));
            prop_assert_eq!(bridge::coerce_int(&Value::Enum(value)).unwrap(), *literal);
        }

        let found = rt.try_from_primitive("Code", probe).unwrap();
        prop_assert_eq!(found.is_some(), literals.contains(&probe));
    }

    #[test]
    fn string_literals_list_in_declaration_order(
        labels in prop::collection::vec(label_strategy(), 1..12),
    ) {
        let mut seen = BTreeSet::new();
        let labels: Vec<String> = labels.into_iter().filter(|l| seen.insert(l.clone())).collect();

        let rt = Runtime::new();
        let mut decl = rt.declare("Tag").backed(BackingKind::String);
        for (i, label) in labels.iter().enumerate() {
            decl = decl.literal(&format!("T{i}"), label.as_str());
        }
        rt.register(decl.build()).unwrap();

        let listing = rt.list("Tag").unwrap();
        let listed: Vec<String> = listing.literals().map(|l| l.to_string()).collect();
        prop_assert_eq!(listed, labels);
    }

    #[test]
    fn repeated_literal_is_rejected(
        literals in prop::collection::vec(any::<i64>(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut with_repeat = literals.clone();
        with_repeat.push(literals[pick.index(literals.len())]);

        let rt = Runtime::new();
        let mut decl = rt.declare("Code").backed(BackingKind::Int);
        for (i, literal) in with_repeat.iter().enumerate() {
            decl = decl.literal(&format!("V{i}"), *literal);
        }
        let err = rt.register(decl.build()).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::E1007);
        prop_assert!(rt.lookup("Code").is_err());
    }

    #[test]
    fn construction_is_equal_not_identical(n in any::<i64>(), s in label_strategy()) {
        let rt = Runtime::new();
        let decl = rt
            .declare("Pair")
            .associated("Of", &[("n", FieldType::Int), ("s", FieldType::Str)])
            .build();
        rt.register(decl).unwrap();

        let make = || {
            rt.construct("Pair", "Of", vec![Value::Int(n), Value::string(s.as_str())])
                .unwrap()
        };
        let a = make();
        let b = make();
        prop_assert_eq!(&a, &b);
        prop_assert!(!a.is_identical(&b));
        prop_assert_eq!(a.field_by_label("n"), Some(&Value::Int(n)));
        prop_assert_eq!(a.field_by_label("s").and_then(Value::as_str), Some(s.as_str()));
    }
}
