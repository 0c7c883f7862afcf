use super::*;
use adt_diagnostic::{AdtError, ErrorCode};
use adt_ir::{BackingKind, FieldType, Literal};
use pretty_assertions::assert_eq;

fn suit(interner: &SharedInterner) -> EnumDeclaration {
    EnumDeclaration::builder(interner, "Suit")
        .unit("Hearts")
        .unit("Diamonds")
        .unit("Clubs")
        .unit("Spades")
        .build()
}

#[test]
fn singletons_are_allocated_once() {
    let registry = TypeRegistry::new(SharedInterner::new());
    registry.register(suit(registry.interner())).unwrap();

    let a = registry.singleton("Suit", "Hearts").unwrap();
    let b = registry.singleton("Suit", "Hearts").unwrap();
    let c = registry.singleton("Suit", "Spades").unwrap();
    assert!(a.is_identical(&b));
    assert!(!a.is_identical(&c));
    assert_ne!(a, c);

    let ty = registry.resolve("Suit").unwrap();
    let hearts = registry.interner().intern("Hearts");
    assert!(ty.singleton(hearts).is_some_and(|s| s.is_identical(&a)));
}

#[test]
fn variants_keep_declaration_order() {
    let registry = TypeRegistry::new(SharedInterner::new());
    registry.register(suit(registry.interner())).unwrap();

    let names: Vec<&str> = registry
        .list_variants("Suit")
        .unwrap()
        .iter()
        .map(|d| d.label)
        .collect();
    assert_eq!(names, ["Hearts", "Diamonds", "Clubs", "Spades"]);

    let clubs = registry.variant("Suit", "Clubs").unwrap();
    assert_eq!(clubs.id.index(), 2);
    assert_eq!(clubs.qualified_name(), "Suit::Clubs");
}

#[test]
fn duplicate_registration_keeps_the_first_type() {
    let registry = TypeRegistry::new(SharedInterner::new());
    let first = registry.register(suit(registry.interner())).unwrap();

    let err = registry.register(suit(registry.interner())).unwrap_err();
    assert_eq!(
        err,
        DeclarationError::DuplicateType {
            type_name: "Suit".into()
        }
    );
    let current = registry.resolve("Suit").unwrap();
    assert!(Heap::ptr_eq(&first, &current));
    assert_eq!(registry.len(), 1);
}

#[test]
fn failed_registration_stores_nothing() {
    let registry = TypeRegistry::new(SharedInterner::new());
    let decl = EnumDeclaration::builder(registry.interner(), "Broken")
        .unit("A")
        .unit("A")
        .build();
    assert_eq!(registry.register(decl).unwrap_err().code(), ErrorCode::E1002);
    assert!(registry.is_empty());
    assert_eq!(
        registry.resolve("Broken").unwrap_err(),
        LookupError::UnknownType {
            type_name: "Broken".into()
        }
    );

    // The name stays free for a corrected declaration.
    let fixed = EnumDeclaration::builder(registry.interner(), "Broken")
        .unit("A")
        .build();
    assert!(registry.register(fixed).is_ok());
}

#[test]
fn lookup_errors() {
    let registry = TypeRegistry::new(SharedInterner::new());
    registry.register(suit(registry.interner())).unwrap();
    registry
        .register(
            EnumDeclaration::builder(registry.interner(), "Distance")
                .associated("Miles", &[("num", FieldType::Int)])
                .build(),
        )
        .unwrap();

    assert_eq!(
        registry.variant("Suit", "Stars").unwrap_err(),
        LookupError::UnknownVariant {
            type_name: "Suit".into(),
            variant: "Stars".into(),
        }
    );
    assert_eq!(
        registry.singleton("Distance", "Miles").unwrap_err(),
        AdtError::Construction(ConstructionError::NotUnit {
            variant: "Distance::Miles".into()
        })
    );
    assert_eq!(registry.names(), ["Distance", "Suit"]);
}

#[test]
fn flags_and_literal_index() {
    let registry = TypeRegistry::new(SharedInterner::new());
    let interner = registry.interner().clone();
    let ty = registry
        .register(
            EnumDeclaration::builder(&interner, "Suit")
                .backed(BackingKind::String)
                .literal("Hearts", "H")
                .literal("Diamonds", "D")
                .build(),
        )
        .unwrap();

    assert!(ty.flags.is_primitive_backed());
    assert!(ty.flags.is_enumerable());
    assert!(!ty.flags.contains(EnumFlags::UNIT));
    let diamonds = ty.singleton_for(&Literal::string("D")).unwrap();
    assert_eq!(diamonds.variant_name(), "Diamonds");
    assert_eq!(diamonds.to_string(), "D");
    assert!(ty.singleton_for(&Literal::string("X")).is_none());
}

#[test]
fn type_ids_are_unique_across_registries() {
    let r1 = TypeRegistry::new(SharedInterner::new());
    let r2 = TypeRegistry::new(SharedInterner::new());
    let a = r1.register(suit(r1.interner())).unwrap();
    let b = r2.register(suit(r2.interner())).unwrap();
    assert_ne!(a.id, b.id);
    assert!(r1.lookup_by_id(b.id).is_none());
    assert!(r1.lookup_by_id(a.id).is_some());
}

#[test]
fn interfaces_resolve_through_extends() {
    let registry = TypeRegistry::new(SharedInterner::new());
    let interner = registry.interner().clone();
    registry
        .register_interface(
            InterfaceDecl::builder(&interner, "Named")
                .method("label", &[], FieldType::Str)
                .build(),
        )
        .unwrap();
    registry
        .register_interface(InterfaceDecl::builder(&interner, "Card").extends("Named").build())
        .unwrap();

    let ty = registry
        .register(
            EnumDeclaration::builder(&interner, "Suit")
                .unit("Hearts")
                .shared("label", &[], FieldType::Str, |_, this, _| {
                    Ok(this.variant_name().into())
                })
                .implements("Card")
                .build(),
        )
        .unwrap();

    assert!(ty.implements(interner.intern("Card")));
    assert!(ty.implements(interner.intern("Named")));
    assert!(registry.interface("Card").is_some());
    assert!(registry.interface("Ghost").is_none());
}

#[test]
fn concurrent_registration_has_one_winner() {
    let registry = TypeRegistry::new(SharedInterner::new());
    let results: Vec<Result<SharedEnumType, DeclarationError>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| registry.register(suit(registry.interner()))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for err in results.into_iter().filter_map(Result::err) {
        assert_eq!(err.code(), ErrorCode::E1001);
    }
    assert_eq!(registry.len(), 1);
}
