//! End-to-end behavior of declared enums through the public runtime API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use adt_diagnostic::{DispatchError, ErrorCode, LookupError};
use adt_eval::{
    AdtError, AdtResult, BackingKind, EnumValue, FieldType, MatchArms, MethodContext, Runtime, Value,
};
use pretty_assertions::assert_eq;

fn suit_with_methods(rt: &Runtime) {
    let decl = rt
        .declare("Suit")
        .unit_with("Hearts", |v| v.returns("color", FieldType::Str, "Red"))
        .unit_with("Diamonds", |v| v.returns("color", FieldType::Str, "Red"))
        .unit_with("Clubs", |v| v.returns("color", FieldType::Str, "Black"))
        .unit_with("Spades", |v| v.returns("color", FieldType::Str, "Black"))
        .shared("shape", &[], FieldType::Str, |_, _, _| {
            Ok(Value::string("Rectangle"))
        })
        .build();
    rt.register(decl).unwrap();
}

#[test]
fn suit_shape_and_color() {
    adt_eval::init_tracing();
    let rt = Runtime::new();
    suit_with_methods(&rt);

    for (variant, color) in [
        ("Hearts", "Red"),
        ("Diamonds", "Red"),
        ("Clubs", "Black"),
        ("Spades", "Black"),
    ] {
        let value = rt.make_unit("Suit", variant).unwrap();
        let shape = rt.invoke(&value, "shape", &[]).unwrap();
        assert_eq!(shape.as_str(), Some("Rectangle"), "{variant}");
        let got = rt.invoke(&value, "color", &[]).unwrap();
        assert_eq!(got.as_str(), Some(color), "{variant}");
    }
}

#[test]
fn associated_values_are_equal_but_not_identical() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Distance")
        .associated("Kilometers", &[("num", FieldType::Int)])
        .associated("Miles", &[("num", FieldType::Int)])
        .build();
    rt.register(decl).unwrap();

    let a = rt.construct("Distance", "Miles", vec![Value::Int(500)]).unwrap();
    let b = rt.construct("Distance", "Miles", vec![Value::Int(500)]).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_identical(&b));

    let km = rt
        .construct("Distance", "Kilometers", vec![Value::Int(500)])
        .unwrap();
    assert_ne!(a, km);
    assert_eq!(format!("{a:?}"), "Distance::Miles(500)");
}

#[test]
fn string_backed_suit_round_trips() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Suit")
        .backed(BackingKind::String)
        .literal("Hearts", "H")
        .literal("Diamonds", "D")
        .literal("Clubs", "C")
        .literal("Spades", "S")
        .build();
    rt.register(decl).unwrap();

    let diamonds = rt.from_primitive("Suit", "D").unwrap();
    assert!(diamonds.is_identical(&rt.make_unit("Suit", "Diamonds").unwrap()));

    let err = rt.from_primitive("Suit", "X").unwrap_err();
    assert_eq!(
        err,
        LookupError::NoMatchingVariant {
            type_name: "Suit".into(),
            literal: "X".into(),
        }
    );
}

fn oven(rt: &Runtime) {
    let status = FieldType::Enum(rt.interner().intern("OvenStatus"));
    let goto = |target: &'static str| {
        move |cx: &dyn MethodContext, _: &EnumValue, _: &[Value]| -> AdtResult<Value> {
            Ok(Value::Enum(cx.unit("OvenStatus", target)?))
        }
    };
    let decl = rt
        .declare("OvenStatus")
        .unit_with("Off", |v| v.exclusive("turnOn", &[], status, goto("On")))
        .unit_with("On", |v| {
            v.exclusive("turnOff", &[], status, goto("Off"))
                .exclusive("idle", &[], status, goto("Idle"))
        })
        .unit_with("Idle", |v| v.exclusive("on", &[], status, goto("On")))
        .build();
    rt.register(decl).unwrap();
}

#[test]
fn oven_state_machine_only_allows_declared_transitions() {
    let rt = Runtime::new();
    oven(&rt);
    let off = rt.make_unit("OvenStatus", "Off").unwrap();

    let on = rt.invoke(&off, "turnOn", &[]).unwrap().into_enum().unwrap();
    assert_eq!(on.variant_name(), "On");
    let idle = rt.invoke(&on, "idle", &[]).unwrap().into_enum().unwrap();
    assert!(idle.is_identical(&rt.make_unit("OvenStatus", "Idle").unwrap()));
    let back_on = rt.invoke(&idle, "on", &[]).unwrap().into_enum().unwrap();
    assert!(back_on.is_identical(&on));

    let err = rt.invoke(&off, "idle", &[]).unwrap_err();
    assert_eq!(
        err,
        AdtError::Dispatch(DispatchError::NoSuchMethod {
            type_name: "OvenStatus".into(),
            variant: "Off".into(),
            method: "idle".into(),
        })
    );
    let err = rt.invoke(&idle, "turnOff", &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E4001);
}

#[test]
fn matching_a_state_machine_requires_every_state() {
    let rt = Runtime::new();
    oven(&rt);
    let idle = rt.make_unit("OvenStatus", "Idle").unwrap();
    let on = rt.make_unit("OvenStatus", "On").unwrap();
    let off = rt.make_unit("OvenStatus", "Off").unwrap();

    let label = rt
        .match_identity(
            &idle,
            MatchArms::new()
                .arm(off.clone(), |_| "cold")
                .arm(on.clone(), |_| "hot")
                .arm(idle.clone(), |_| "warm"),
        )
        .unwrap();
    assert_eq!(label, "warm");

    let err = rt
        .match_identity(&idle, MatchArms::new().arm(off, |_| ()).arm(on, |_| ()))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E4002);
}

#[test]
fn type_match_reads_associated_fields() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Shape")
        .associated("Circle", &[("r", FieldType::Float)])
        .associated("Rect", &[("w", FieldType::Float), ("h", FieldType::Float)])
        .associated("Square", &[("side", FieldType::Float)])
        .build();
    rt.register(decl).unwrap();

    let circle = rt.variant("Shape", "Circle").unwrap();
    let rect = rt.variant("Shape", "Rect").unwrap();
    let area = |value: &EnumValue| {
        rt.match_type(
            value,
            MatchArms::new()
                .arm(circle.clone(), |v| {
                    let r = v.field_by_label("r").and_then(Value::as_float).unwrap_or(0.0);
                    3.0 * r * r
                })
                .arm(rect.clone(), |v| {
                    let w = v.field_by_label("w").and_then(Value::as_float).unwrap_or(0.0);
                    let h = v.field_by_label("h").and_then(Value::as_float).unwrap_or(0.0);
                    w * h
                })
                .otherwise(|v| {
                    let side = v.field_by_label("side").and_then(Value::as_float).unwrap_or(0.0);
                    side * side
                }),
        )
        .unwrap()
    };

    let r = rt
        .construct_named(
            "Shape",
            "Rect",
            vec![("h", Value::Float(2.0)), ("w", Value::Float(3.0))],
        )
        .unwrap();
    let c = rt.construct("Shape", "Circle", vec![Value::Float(1.0)]).unwrap();
    let s = rt.construct("Shape", "Square", vec![Value::Float(2.0)]).unwrap();
    assert!((area(&r) - 6.0).abs() < f64::EPSILON);
    assert!((area(&c) - 3.0).abs() < f64::EPSILON);
    assert!((area(&s) - 4.0).abs() < f64::EPSILON);
}

#[test]
fn unit_variant_cannot_join_an_associated_type() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Shape")
        .unit("Empty")
        .associated("Circle", &[("r", FieldType::Float)])
        .build();

    let err = rt.register(decl).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1020);
    assert!(rt.lookup("Shape").is_err());
    assert_eq!(
        rt.construct("Shape", "Circle", vec![Value::Float(1.0)])
            .unwrap_err()
            .code(),
        ErrorCode::E3003
    );
}

#[test]
fn string_hooks_drive_display() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Planet")
        .unit("Mercury")
        .unit_with("Earth", |v| v.string_hook(|_| "home".to_owned()))
        .string_hook(|v| format!("planet {}", v.variant_name()))
        .build();
    rt.register(decl).unwrap();

    let mercury = rt.make_unit("Planet", "Mercury").unwrap();
    let earth = rt.make_unit("Planet", "Earth").unwrap();
    assert_eq!(mercury.to_string(), "planet Mercury");
    assert_eq!(earth.to_string(), "home");
}
