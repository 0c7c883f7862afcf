use super::*;

#[test]
fn name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
    assert_eq!(Name::from_raw(name.raw()), name);
}

#[test]
fn empty_name_is_default() {
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn names_hash_by_raw_value() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Name::new(0, 1));
    set.insert(Name::new(0, 1));
    set.insert(Name::new(3, 1));
    assert_eq!(set.len(), 2);
}
