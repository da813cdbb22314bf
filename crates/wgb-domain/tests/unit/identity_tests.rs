//! Unit tests for identity derivation and equality

use std::collections::{HashMap, HashSet};

use wgb_domain::value_objects::{
    ConfigAisle, ConfigConnection, ConfigShuttle, Discriminator, Identity, IdentityKind,
};

#[test]
fn test_equal_config_data_yields_equal_identity() {
    let a = ConfigConnection::new(7);
    let b = ConfigConnection::new(7);
    assert_eq!(a.identity(), b.identity());

    let mut map = HashMap::new();
    map.insert(a.identity(), "first");
    assert_eq!(map.get(&b.identity()), Some(&"first"));
}

#[test]
fn test_distinct_config_data_yields_distinct_identity() {
    let identities: HashSet<Identity> = (1..=5)
        .map(|n| ConfigConnection::new(n).identity())
        .collect();
    assert_eq!(identities.len(), 5);
}

#[test]
fn test_shuttle_identity_includes_aisle_number() {
    let shuttle = ConfigShuttle::new(1, 1, 2);
    assert_ne!(shuttle.identity(1), shuttle.identity(2));
    assert_eq!(shuttle.identity(1), Identity::shuttle(1, 1));
}

#[test]
fn test_shuttle_identity_ignores_bookkeeping_id() {
    let a = ConfigShuttle::new(1, 3, 1);
    let b = ConfigShuttle::new(99, 3, 2);
    assert_eq!(a.identity(4), b.identity(4));
}

#[test]
fn test_discriminator_order_matters() {
    assert_ne!(Identity::shuttle(1, 2), Identity::shuttle(2, 1));
}

#[test]
fn test_aisle_identity() {
    let aisle = ConfigAisle::new(3);
    assert_eq!(aisle.identity().kind(), IdentityKind::Aisle);
    assert_eq!(aisle.identity().discriminators(), &[Discriminator::Int(3)]);
}

#[test]
fn test_private_slots_are_qualified_by_shuttle() {
    assert_ne!(
        Identity::shuttle_num_slot(1, 1),
        Identity::shuttle_num_slot(2, 1)
    );
    assert_ne!(
        Identity::shuttle_num_slot(1, 1),
        Identity::shuttle_aisle_num_slot(1, 1)
    );
}

#[test]
fn test_named_identity_with_string_discriminator() {
    let id = Identity::new(IdentityKind::Named, ["allShuttles".into()]);
    assert_eq!(id, Identity::all_shuttles());
    assert_eq!(id.to_string(), "(Named,[\"allShuttles\"])");
}

#[test]
fn test_identity_serializes_discriminators_untagged() {
    let json = serde_json::to_string(&Identity::aisle_shuttles(2)).unwrap();
    assert_eq!(json, r#"{"kind":"Named","discriminators":["shuttles",2]}"#);
}
