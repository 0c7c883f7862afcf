//! Registration races and parallel use of one runtime.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Barrier;
use std::thread;

use adt_diagnostic::ErrorCode;
use adt_eval::{FieldType, Runtime, Value};
use pretty_assertions::assert_eq;
use rayon::prelude::*;

#[test]
fn racing_registrations_have_one_winner() {
    const THREADS: usize = 8;
    let rt = Runtime::new();
    let barrier = Barrier::new(THREADS);

    let outcomes: Vec<Result<(), ErrorCode>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let rt = &rt;
                let barrier = &barrier;
                s.spawn(move || {
                    let decl = rt
                        .declare("Shared")
                        .unit(&format!("Only{i}"))
                        .build();
                    barrier.wait();
                    rt.register(decl).map(|_| ()).map_err(|e| e.code())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .filter_map(|o| o.as_ref().err())
        .all(|code| *code == ErrorCode::E1001));

    let variants = rt.list_variants("Shared").unwrap();
    assert_eq!(variants.len(), 1);
    let winner = variants[0].label;
    assert!(rt.make_unit("Shared", winner).is_ok());
}

#[test]
fn distinct_names_register_in_parallel() {
    let rt = Runtime::new();
    (0..32).into_par_iter().for_each(|i| {
        let decl = rt.declare(&format!("Type{i}")).unit("A").unit("B").build();
        rt.register(decl).unwrap();
    });
    assert_eq!(rt.registry().len(), 32);
}

#[test]
fn parallel_construction_and_dispatch() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Distance")
        .associated_with("Miles", &[("num", FieldType::Int)], |v| {
            v.method("km", &[], FieldType::Int, |_, receiver, _| {
                let miles = receiver.fields()[0].as_int().unwrap_or_default();
                Ok(Value::Int(miles * 1609 / 1000))
            })
        })
        .build();
    rt.register(decl).unwrap();

    let values: Vec<_> = (0..1000_i64)
        .into_par_iter()
        .map(|n| rt.construct("Distance", "Miles", vec![Value::Int(n)]).unwrap())
        .collect();
    let total: i64 = values
        .par_iter()
        .map(|v| rt.invoke(v, "km", &[]).unwrap().as_int().unwrap())
        .sum();
    let expected: i64 = (0..1000_i64).map(|n| n * 1609 / 1000).sum();
    assert_eq!(total, expected);

    let singles: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| rt.registry().variant("Distance", "Miles").unwrap())
        .collect();
    assert!(singles.iter().all(|d| d.id == singles[0].id));
}

#[test]
fn singletons_are_shared_across_threads() {
    let rt = Runtime::new();
    let decl = rt.declare("Suit").unit("Hearts").unit("Spades").build();
    rt.register(decl).unwrap();
    let reference = rt.make_unit("Suit", "Hearts").unwrap();

    let all_same = (0..256)
        .into_par_iter()
        .map(|_| rt.make_unit("Suit", "Hearts").unwrap())
        .all(|v| v.is_identical(&reference));
    assert!(all_same);
}
