use super::*;
use crate::Runtime;
use adt_diagnostic::ErrorCode;
use adt_ir::FieldType;
use pretty_assertions::assert_eq;

fn runtime() -> Runtime {
    let rt = Runtime::new();
    let suit = rt
        .declare("Suit")
        .backed(BackingKind::String)
        .literal("Hearts", "H")
        .literal("Diamonds", "D")
        .literal("Clubs", "C")
        .literal("Spades", "S")
        .build();
    let status = rt
        .declare("Status")
        .backed(BackingKind::Int)
        .literal("Ok", 200_i64)
        .literal("NotFound", 404_i64)
        .build();
    let ratio = rt
        .declare("Ratio")
        .backed(BackingKind::Float)
        .literal("Half", 0.5)
        .literal("Whole", 1.0)
        .build();
    let plain = rt.declare("Plain").unit("A").unit("B").build();
    let shape = rt
        .declare("Shape")
        .associated("Circle", &[("radius", FieldType::Float)])
        .associated("Square", &[("side", FieldType::Float)])
        .build();
    for decl in [suit, status, ratio, plain, shape] {
        rt.register(decl).unwrap();
    }
    rt
}

#[test]
fn from_primitive_returns_the_singleton() {
    let rt = runtime();
    let suit = rt.lookup("Suit").unwrap();

    let diamonds = from_primitive(&suit, &Literal::string("D")).unwrap();
    assert_eq!(diamonds.variant_name(), "Diamonds");
    assert!(diamonds.is_identical(&rt.make_unit("Suit", "Diamonds").unwrap()));

    let err = from_primitive(&suit, &Literal::string("X")).unwrap_err();
    assert_eq!(
        err,
        LookupError::NoMatchingVariant {
            type_name: "Suit".into(),
            literal: "X".into(),
        }
    );
}

#[test]
fn try_from_primitive_distinguishes_miss_from_misuse() {
    let rt = runtime();
    let status = rt.lookup("Status").unwrap();
    assert!(try_from_primitive(&status, &Literal::Int(500)).unwrap().is_none());

    let plain = rt.lookup("Plain").unwrap();
    let err = try_from_primitive(&plain, &Literal::Int(0)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3002);
}

#[test]
fn literal_of_another_kind_never_matches() {
    let rt = runtime();
    let status = rt.lookup("Status").unwrap();
    assert!(try_from_primitive(&status, &Literal::string("200"))
        .unwrap()
        .is_none());
}

#[test]
fn negative_zero_finds_the_zero_variant() {
    let rt = Runtime::new();
    let decl = rt
        .declare("Sign")
        .backed(BackingKind::Float)
        .literal("Zero", 0.0)
        .literal("One", 1.0)
        .build();
    let sign = rt.register(decl).unwrap();
    let zero = from_primitive(&sign, &Literal::Float(-0.0)).unwrap();
    assert_eq!(zero.variant_name(), "Zero");
}

#[test]
fn to_primitive_round_trips() {
    let rt = runtime();
    for (ty, literal) in [
        ("Suit", Literal::string("S")),
        ("Status", Literal::Int(404)),
        ("Ratio", Literal::Float(0.5)),
    ] {
        let value = from_primitive(&rt.lookup(ty).unwrap(), &literal).unwrap();
        assert_eq!(to_primitive(&value).unwrap(), literal);
    }

    let a = rt.make_unit("Plain", "A").unwrap();
    assert_eq!(to_primitive(&a).unwrap_err().code(), ErrorCode::E3002);
}

#[test]
fn list_keeps_declaration_order() {
    let rt = runtime();
    let listing = list(&rt.lookup("Suit").unwrap()).unwrap();
    assert_eq!(listing.len(), 4);

    let literals: Vec<String> = listing.literals().map(ToString::to_string).collect();
    assert_eq!(literals, ["H", "D", "C", "S"]);

    let clubs = listing.get(&Literal::string("C")).unwrap();
    assert_eq!(clubs.variant_name(), "Clubs");
    assert!(listing.get(&Literal::string("X")).is_none());

    for (literal, value) in listing.iter() {
        assert_eq!(value.literal(), Some(literal));
    }
}

#[test]
fn list_requires_a_backed_type() {
    let rt = runtime();
    let err = list(&rt.lookup("Plain").unwrap()).unwrap_err();
    assert_eq!(
        err,
        LookupError::NotPrimitiveBacked {
            type_name: "Plain".into()
        }
    );
}

#[test]
fn cases_rejects_associated_types() {
    let rt = runtime();
    let names: Vec<&str> = cases(&rt.lookup("Plain").unwrap())
        .unwrap()
        .iter()
        .map(EnumValue::variant_name)
        .collect();
    assert_eq!(names, ["A", "B"]);

    let err = cases(&rt.lookup("Shape").unwrap()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3005);
}

#[test]
fn coercions_accept_matching_backings() {
    let rt = runtime();
    let ok = Value::Enum(rt.make_unit("Status", "Ok").unwrap());
    let half = Value::Enum(rt.make_unit("Ratio", "Half").unwrap());
    let hearts = Value::Enum(rt.make_unit("Suit", "Hearts").unwrap());

    assert_eq!(coerce_int(&ok).unwrap(), 200);
    assert_eq!(coerce_int(&Value::Int(7)).unwrap(), 7);
    assert!((coerce_float(&half).unwrap() - 0.5).abs() < f64::EPSILON);
    assert_eq!(coerce_str(&hearts).unwrap(), "H");
    assert_eq!(coerce_str(&Value::string("x")).unwrap(), "x");
}

#[test]
fn coercions_reject_other_kinds() {
    let rt = runtime();
    let hearts = Value::Enum(rt.make_unit("Suit", "Hearts").unwrap());
    let a = Value::Enum(rt.make_unit("Plain", "A").unwrap());

    let err = coerce_int(&hearts).unwrap_err();
    assert_eq!(
        err,
        LookupError::CoercionMismatch {
            value: "Suit::Hearts".into(),
            expected: "int".into(),
        }
    );
    assert_eq!(coerce_float(&Value::Bool(true)).unwrap_err().code(), ErrorCode::E3006);
    assert_eq!(coerce_str(&a).unwrap_err().code(), ErrorCode::E3002);
}

#[test]
fn interpolation_uses_backing_literals() {
    let rt = runtime();
    let parts = [
        Value::string("suit="),
        Value::Enum(rt.make_unit("Suit", "Clubs").unwrap()),
        Value::string(" status="),
        Value::Enum(rt.make_unit("Status", "NotFound").unwrap()),
        Value::string(" plain="),
        Value::Enum(rt.make_unit("Plain", "B").unwrap()),
    ];
    assert_eq!(interpolate(&parts), "suit=C status=404 plain=B");
}
