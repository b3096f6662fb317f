//! Room and owner data model.
//!
//! Two plain entities and the link between them:
//!
//! - [`Owner`] — a name plus an optional phone number.
//! - [`OwnerHandle`] — a shared, mutable reference to one `Owner`. Many
//!   rooms can hold clones of the same handle, and a rename through any
//!   of them is visible through all of them.
//! - [`Room`] — width, length and an optional `OwnerHandle`.
//! - [`ModelError`] — what can go wrong (only phone parsing can).
//!
//! # Sharing
//!
//! ```text
//!   Room A ──┐
//!   Room B ──┼──→ OwnerHandle ──→ Owner { name, phone }
//!   Room C ──┘
//! ```
//!
//! The handle is single-threaded. It does no locking, so the compiler
//! refuses to send it to another thread; callers that need rooms on
//! several threads must bring their own synchronization.

mod error;
mod owner;
mod room;

pub use error::ModelError;
pub use owner::{Owner, OwnerHandle, PhoneInput};
pub use room::{MAX_WIDTH, MIN_WIDTH, Room};
