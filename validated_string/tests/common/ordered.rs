use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashSet},
};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use validated_string::Validator;

use crate::{NonEmptyTrimmed, Trimmed};

#[test]
fn stores_trimmed_value() {
    let x = Trimmed::new("  hello  ").unwrap();
    assert_eq!("hello", x.as_str());
    assert_eq!("hello", AsRef::<str>::as_ref(&x));
}

#[test]
fn rejects_blank_input() {
    assert!(Trimmed::new("").is_none());
    assert!(Trimmed::new("   ").is_none());
    assert!(Trimmed::new("\r\n\t").is_none());
}

#[test]
fn owned_conversion_keeps_canonical_input() {
    use std::convert::TryFrom;

    let x = Trimmed::try_from(String::from("already trimmed")).unwrap();
    assert_eq!("already trimmed", x.as_str());

    let y = Trimmed::try_from(String::from(" padded ")).unwrap();
    assert_eq!("padded", y.as_str());
}

#[test]
fn equal_after_canonicalization() {
    let a = Trimmed::new(" same").unwrap();
    let b = Trimmed::new("same ").unwrap();
    assert_eq!(a, b);
    assert_eq!(Ordering::Equal, a.cmp(&b));
}

#[test]
fn orders_lexically() {
    let apple = Trimmed::from_static("apple");
    let banana = Trimmed::from_static("banana");
    assert!(apple < banana);
    assert!(banana > apple);
    assert_eq!(Some(Ordering::Less), apple.partial_cmp(&banana));
    assert_eq!(&apple, std::cmp::min(&apple, &banana));
}

#[test]
fn can_use_as_hash_key() {
    let mut set = HashSet::new();
    assert!(set.insert(Trimmed::from_static("one")));
    assert!(set.insert(Trimmed::from_static("two")));
    assert!(!set.insert(Trimmed::new("  one ").unwrap()));
    assert_eq!(2, set.len());
    assert!(set.contains(&Trimmed::from_static("two")));
}

#[test]
fn can_use_as_btree_key() {
    let mut map = BTreeMap::new();
    map.insert(Trimmed::from_static("cherry"), 3);
    map.insert(Trimmed::from_static("apple"), 1);
    map.insert(Trimmed::from_static("banana"), 2);

    let keys: Vec<&str> = map.keys().map(Trimmed::as_str).collect();
    assert_eq!(vec!["apple", "banana", "cherry"], keys);
    assert_eq!(Some(&1), map.get(&Trimmed::from_static("apple")));
}

#[test]
fn sorts_and_deduplicates() {
    let mut values: Vec<Trimmed> = ["b", " a", "c ", "a", " b "]
        .iter()
        .map(|s| Trimmed::new(s).unwrap())
        .collect();
    values.sort();
    values.dedup();

    let sorted: Vec<&str> = values.iter().map(Trimmed::as_str).collect();
    assert_eq!(vec!["a", "b", "c"], sorted);
}

#[quickcheck]
fn canonical_form_is_a_fixed_point(input: String) -> TestResult {
    match NonEmptyTrimmed::validate(&input) {
        None => TestResult::discard(),
        Some(canonical) => TestResult::from_bool(
            NonEmptyTrimmed::validate(&canonical).as_deref() == Some(&*canonical),
        ),
    }
}

#[quickcheck]
fn stored_value_matches_validator_output(input: String) -> bool {
    let expected = NonEmptyTrimmed::validate(&input);
    let actual = Trimmed::new(&input);
    expected.as_deref() == actual.as_ref().map(Trimmed::as_str)
}

#[quickcheck]
fn exactly_one_ordering_holds(a: String, b: String) -> TestResult {
    let (a, b) = match (Trimmed::new(&a), Trimmed::new(&b)) {
        (Some(a), Some(b)) => (a, b),
        _ => return TestResult::discard(),
    };

    let outcomes = [a < b, a == b, a > b];
    TestResult::from_bool(outcomes.iter().filter(|&&holds| holds).count() == 1)
}

#[quickcheck]
fn ordering_is_transitive(a: String, b: String, c: String) -> TestResult {
    let (a, b, c) = match (Trimmed::new(&a), Trimmed::new(&b), Trimmed::new(&c)) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return TestResult::discard(),
    };

    TestResult::from_bool(!(a < b && b < c) || a < c)
}

#[quickcheck]
fn btree_set_agrees_with_hash_set(inputs: Vec<String>) -> bool {
    let values: Vec<Trimmed> = inputs.iter().filter_map(|s| Trimmed::new(s)).collect();
    let ordered: BTreeSet<&Trimmed> = values.iter().collect();
    let hashed: HashSet<&Trimmed> = values.iter().collect();
    ordered.len() == hashed.len()
}
