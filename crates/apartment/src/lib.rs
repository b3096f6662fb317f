//! # Apartment
//!
//! Collections of rooms built on [`apartment_model`].
//!
//! - [`Apartment`] — an ordered list of rooms with area and ownership
//!   queries.
//! - [`furnish`] / [`furnish_from_config`] — fill an apartment with rooms
//!   split at random between one shared management owner and individual
//!   owners, driven by a [`FurnishConfig`].
//! - [`ApartmentError`] — wraps every error the workspace can produce.
//! - [`init_tracing`] — installs a console log subscriber for binaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use apartment::prelude::*;
//!
//! let management = OwnerHandle::new(Owner::new("Management"));
//! let mut apartment = Apartment::new();
//! apartment.push(Room::with_owner(10.0, 12.0, management.clone()));
//! apartment.push(Room::with_owner(8.0, 9.0, management.clone()));
//!
//! management.borrow_mut().set_name("New Management");
//! assert!(apartment
//!     .iter()
//!     .all(|room| room.owner().unwrap().borrow().name() == "New Management"));
//! assert_eq!(apartment.total_square_feet(), 192.0);
//! ```

mod apartment;
mod config;
mod error;
mod furnishing;
mod logging;

pub use apartment::Apartment;
pub use config::FurnishConfig;
pub use error::ApartmentError;
pub use furnishing::{furnish, furnish_from_config};
pub use logging::init_tracing;

/// Everything needed to build and inspect apartments.
pub mod prelude {
    pub use crate::{
        Apartment, ApartmentError, FurnishConfig, furnish, furnish_from_config,
        init_tracing,
    };
    pub use apartment_model::{
        MAX_WIDTH, MIN_WIDTH, ModelError, Owner, OwnerHandle, PhoneInput, Room,
    };
}
