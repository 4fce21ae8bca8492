//! `AliasTable` as a plain map when the `serde` feature is on.

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use unalias::{AliasTable, Resolver};

#[test]
fn test_deserialize_from_map() {
    let aliases: AliasTable = serde_json::from_str(
        r#"{
            "admins": ["root", "ops"],
            "ops": ["alice", "bob"],
            "cyclic": ["cyclic"]
        }"#,
    )
    .unwrap();

    assert_eq!(aliases.len(), 3);
    let resolver = Resolver::new(&aliases);
    assert_eq!(resolver.resolve_all(&["admins", "-bob", "cyclic"]), ["root", "alice", "cyclic"]);
}

#[test]
fn test_serialize_round_trip_is_a_map() {
    let aliases: AliasTable = [("ops", vec!["alice"])].into_iter().collect();
    let json = serde_json::to_value(&aliases).unwrap();
    assert_eq!(json, serde_json::json!({ "ops": ["alice"] }));
}
