use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let list = interner.intern("List");
    let map = interner.intern("Map");
    let list2 = interner.intern("List");

    assert_eq!(list, list2);
    assert_ne!(list, map);
    assert_eq!(interner.lookup(list), "List");
    assert_eq!(interner.lookup(map), "Map");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_well_known_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.get("hashCode").is_some());
    assert!(interner.get("<no name provided>").is_some());
    assert!(interner.get("definitelyNotInterned").is_none());
}

#[test]
fn test_len_counts_new_strings_once() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("Fresh");
    interner.intern("Fresh");
    assert_eq!(interner.len(), before + 1);
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");
    assert_eq!(name1, name2);
}

#[test]
fn test_concurrent_interning() {
    let interner = SharedInterner::new();
    let names: Vec<Vec<Name>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let interner = interner.clone();
                scope.spawn(move || {
                    (0..64)
                        .map(|i| interner.intern(&format!("ident{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });
    for other in &names[1..] {
        assert_eq!(&names[0], other);
    }
}
