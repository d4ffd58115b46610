use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{StellarBody, StellarBodyId, StellarBodySize, MAX_STELLAR_BODY_SIZE};
use crate::composition::Composition;

#[test]
fn test_size_clamps_to_maximum() {
    assert_eq!(StellarBodySize::new(200).value(), MAX_STELLAR_BODY_SIZE);
    assert_eq!(StellarBodySize::new(3).value(), 3);
}

#[test]
fn test_smaller_size_class() {
    assert_eq!(StellarBodySize::new(3).smaller(), Some(StellarBodySize::new(2)));
    assert_eq!(StellarBodySize::new(0).smaller(), None);
}

#[test]
fn test_ids_are_reproducible_from_seed() {
    let mut rng1 = ChaChaRng::seed_from_u64(99);
    let mut rng2 = ChaChaRng::seed_from_u64(99);

    assert_eq!(
        StellarBodyId::from_rng(&mut rng1),
        StellarBodyId::from_rng(&mut rng2)
    );
}

#[test]
fn test_catalog_name_format() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let id = StellarBodyId::from_rng(&mut rng);

    let name = id.catalog_name();
    assert_eq!(name.len(), 7);
    assert_eq!(name.as_bytes()[2], b'-');
    assert!(name[..2].chars().all(|c| c.is_ascii_uppercase()));
    assert!(name[3..].chars().all(|c| c.is_ascii_digit()));

    // Deterministic: same id, same designation
    assert_eq!(name, id.catalog_name());
}

#[test]
fn test_body_round_trips_through_json() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let body = StellarBody {
        id: StellarBodyId::from_rng(&mut rng),
        name: "Wryan".to_string(),
        size: StellarBodySize::new(2),
        distance_from_center: 250.0,
        rotation_speed: 25.0,
        composition: Composition::sample(&mut rng, 1, 0).unwrap(),
        orbit: vec![StellarBodyId::from_rng(&mut rng)],
    };

    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"distanceFromCenter\":250.0"));

    let back: StellarBody = serde_json::from_str(&json).unwrap();
    assert_eq!(back, body);
}
