//! Integration tests for apartment furnishing.
//!
//! All tests use a seeded `StdRng` so room layouts are reproducible.

use apartment::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =========================================================================
// Helpers
// =========================================================================

fn config(room_count: usize, management_share: f64) -> FurnishConfig {
    FurnishConfig {
        room_count,
        management_share,
        ..FurnishConfig::default()
    }
}

fn render(apartment: &Apartment) -> Vec<String> {
    apartment.iter().map(Room::to_string).collect()
}

// =========================================================================
// Ownership split
// =========================================================================

#[test]
fn test_all_management_rooms_share_one_owner() {
    let apartment = furnish(&config(6, 1.0), &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(apartment.len(), 6);

    let owners = apartment.distinct_owners();
    assert_eq!(owners.len(), 1);
    let management = &owners[0];
    assert_eq!(management.borrow().name(), "Management");
    assert_eq!(management.borrow().phone(), "5550000000");
    // one handle per room plus the one in `owners`
    assert_eq!(management.holders(), 7);
}

#[test]
fn test_management_rename_shows_in_every_room() {
    let apartment = furnish(&config(4, 1.0), &mut StdRng::seed_from_u64(3)).unwrap();
    apartment.rooms()[0]
        .owner()
        .unwrap()
        .borrow_mut()
        .set_name("Acme Holdings");

    for room in &apartment {
        assert!(room.to_string().contains("Owner [Acme Holdings | 5550000000]"));
    }
}

#[test]
fn test_individual_rooms_have_distinct_owners() {
    let apartment = furnish(&config(5, 0.0), &mut StdRng::seed_from_u64(9)).unwrap();
    let owners = apartment.distinct_owners();
    assert_eq!(owners.len(), 5);

    for (i, owner) in owners.iter().enumerate() {
        let owner = owner.borrow();
        assert_eq!(owner.name(), format!("John Doe {i}"));
        let phone = owner.phone_number().unwrap();
        assert!((1_000_000_000.0..9_999_999_999.0).contains(&phone), "phone {phone}");
    }
}

// =========================================================================
// Room sizes
// =========================================================================

#[test]
fn test_management_room_sizes() {
    let apartment = furnish(&config(3, 1.0), &mut StdRng::seed_from_u64(0)).unwrap();
    let sizes: Vec<(f64, f64)> = apartment.iter().map(|r| (r.width(), r.length())).collect();
    assert_eq!(sizes, vec![(2.0, 2.0), (9.0, 5.0), (16.0, 8.0)]);
}

#[test]
fn test_individual_room_widths_are_clamped() {
    let apartment = furnish(&config(15, 0.0), &mut StdRng::seed_from_u64(0)).unwrap();
    let last = &apartment.rooms()[14];
    // 10 * 14 + 2 = 142, clamped; length is not
    assert_eq!(last.width(), 100.0);
    assert_eq!(last.length(), 72.0);
    assert!(apartment.iter().all(|r| (MIN_WIDTH..=MAX_WIDTH).contains(&r.width())));
}

#[test]
fn test_total_square_feet_sums_rooms() {
    let apartment = furnish(&config(15, 0.5), &mut StdRng::seed_from_u64(42)).unwrap();
    let expected: f64 = apartment.iter().map(|r| r.width() * r.length()).sum();
    assert_eq!(apartment.total_square_feet(), expected);
    assert!(apartment.total_square_feet() > 0.0);
}

// =========================================================================
// Seeding
// =========================================================================

#[test]
fn test_same_seed_same_apartment() {
    let cfg = FurnishConfig {
        seed: Some(1234),
        ..FurnishConfig::default()
    };
    let a = furnish_from_config(&cfg).unwrap();
    let b = furnish_from_config(&cfg).unwrap();
    assert_eq!(render(&a), render(&b));
}

#[test]
fn test_unseeded_furnish_respects_room_count() {
    let apartment = furnish_from_config(&config(8, 0.5)).unwrap();
    assert_eq!(apartment.len(), 8);
}

#[test]
fn test_json_config_drives_furnishing() {
    let cfg = FurnishConfig::from_json(
        r#"{ "room_count": 3, "management_share": 1.0, "management_name": "HOA" }"#,
    )
    .unwrap();
    let apartment = furnish_from_config(&cfg).unwrap();
    assert_eq!(
        render(&apartment)[0],
        "Room [2x2 | Sq.ft. 4 | Owner: Owner [HOA | 5550000000]]"
    );
}
