//! Randomized apartment furnishing.
//!
//! Each room goes either to the single management owner, shared by every
//! management room, or to a fresh individual owner with a random phone.
//! Room sizes grow with the room's index so rooms stay distinguishable:
//!
//! ```text
//! management:  (7i + 2) x (3i + 2)
//! individual: (10i + 2) x (5i + 2)   owner "John Doe i"
//! ```

use apartment_model::{Owner, OwnerHandle, Room};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Apartment, ApartmentError, FurnishConfig};

/// Lowest random phone number handed to individual owners. Inclusive.
const MIN_PHONE: f64 = 1_000_000_000.0;

/// Upper bound for random phone numbers. Exclusive.
const MAX_PHONE: f64 = 9_999_999_999.0;

/// Builds an apartment of `config.room_count` rooms using `rng`.
///
/// Fails if the config is invalid or the management phone is not finite.
pub fn furnish<R: Rng>(
    config: &FurnishConfig,
    rng: &mut R,
) -> Result<Apartment, ApartmentError> {
    config.validate()?;

    let management = OwnerHandle::new(Owner::with_phone(
        config.management_name.as_str(),
        config.management_phone,
    )?);

    let mut apartment = Apartment::new();
    for i in 0..config.room_count {
        let step = i as f64;
        let room = if rng.random_bool(config.management_share) {
            Room::with_owner(7.0 * step + 2.0, 3.0 * step + 2.0, management.clone())
        } else {
            let phone = rng.random_range(MIN_PHONE..MAX_PHONE);
            let owner = Owner::with_phone(format!("John Doe {i}"), phone)?;
            Room::with_owner(10.0 * step + 2.0, 5.0 * step + 2.0, owner.into())
        };
        apartment.push(room);
    }

    tracing::debug!(
        rooms = apartment.len(),
        management_rooms = apartment.rooms_owned_by(&management).count(),
        "apartment furnished"
    );
    Ok(apartment)
}

/// Builds an apartment, seeding the RNG from `config.seed` when present.
pub fn furnish_from_config(config: &FurnishConfig) -> Result<Apartment, ApartmentError> {
    match config.seed {
        Some(seed) => furnish(config, &mut StdRng::seed_from_u64(seed)),
        None => furnish(config, &mut rand::rng()),
    }
}
