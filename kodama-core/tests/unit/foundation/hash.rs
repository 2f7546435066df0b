use super::*;

#[test]
fn empty_string_hashes_to_zero() {
    assert_eq!(hash(""), 0);
}

#[test]
fn golden_values_are_pinned() {
    // Compatibility anchors: existing avatar URLs depend on these.
    assert_eq!(hash("alice"), 92_903_040);
    assert_eq!(hash("bob"), 97_717);
    assert_eq!(hash("carol"), 94_431_409);
}

#[test]
fn hash_is_deterministic() {
    for name in ["", "alice", "bob", "かみ", "a much longer input string"] {
        assert_eq!(hash(name), hash(name));
    }
}

#[test]
fn non_bmp_input_uses_utf16_units() {
    // Two UTF-16 code units, hashed as such.
    assert_eq!(hash("日本"), 835_047);
}

#[test]
fn demo_names_produce_distinct_seeds() {
    let names = ["alice", "bob", "carol", "dave", "erin", "frank"];
    let seeds: Vec<u32> = names.iter().map(|n| hash(n)).collect();
    for (i, a) in seeds.iter().enumerate() {
        for b in &seeds[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
