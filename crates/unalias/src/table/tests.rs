use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_insert_and_get() {
    let mut table = AliasTable::new();
    assert!(table.is_empty());

    assert_eq!(table.insert("alias3", ["value4"]), None);
    assert_eq!(table.get("alias3"), Some(&["value4".to_string()][..]));
    assert!(table.contains("alias3"));
    assert!(!table.contains("value4"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_insert_replaces_definition() {
    let mut table = AliasTable::new();
    table.insert("alias3", ["value4"]);

    let previous = table.insert("alias3", ["value5", "value6"]);
    assert_eq!(previous, Some(vec!["value4".to_string()]));
    assert_eq!(table.get("alias3").map(<[String]>::len), Some(2));
}

#[test]
fn test_accepts_unvalidated_definitions() {
    let table: AliasTable = [
        ("cyclic", vec!["cyclic"]),
        ("empty", vec![]),
        ("dangling", vec!["nowhere"]),
        ("a", vec!["b"]),
        ("b", vec!["a"]),
    ]
    .into_iter()
    .collect();

    assert_eq!(table.len(), 5);
    assert_eq!(table.get("empty"), Some(&[][..]));
}

#[test]
fn test_from_hash_map() {
    let mut map = HashMap::new();
    map.insert("alias1".to_string(), vec!["value1".to_string()]);
    let table = AliasTable::from(map);

    let mut names: Vec<_> = table.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["alias1"]);
}

#[test]
fn test_iter_pairs() {
    let table: AliasTable = [("alias2", vec!["value3", "alias3"])].into_iter().collect();
    let pairs: Vec<_> = table.iter().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "alias2");
    assert_eq!(pairs[0].1, ["value3".to_string(), "alias3".to_string()]);
}

#[test]
fn test_with_capacity_is_empty() {
    let table = AliasTable::with_capacity(16);
    assert!(table.is_empty());
    assert_eq!(table, AliasTable::new());
}
