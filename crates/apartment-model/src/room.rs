//! Rooms: two dimensions and an optional shared owner.

use std::fmt;

use crate::OwnerHandle;

/// Smallest width a room may have. Inclusive.
pub const MIN_WIDTH: f64 = 0.0;

/// Largest width a room may have. Inclusive.
pub const MAX_WIDTH: f64 = 100.0;

/// A rectangular room, optionally owned.
///
/// Width always lies in `[MIN_WIDTH, MAX_WIDTH]`: out-of-range widths are
/// clamped and logged, never rejected. Length is stored exactly as given,
/// with no range check.
///
/// Cloning a room clones the owner handle, so the clone shares the owner
/// rather than copying it.
#[derive(Debug, Clone, Default)]
pub struct Room {
    width: f64,
    length: f64,
    owner: Option<OwnerHandle>,
}

impl Room {
    /// Creates an unowned room. `width` is clamped like [`Room::set_width`].
    pub fn new(width: f64, length: f64) -> Self {
        Self {
            width: clamp_width(width),
            length,
            owner: None,
        }
    }

    /// Creates a room held by `owner`. The handle is stored, not copied.
    pub fn with_owner(width: f64, length: f64, owner: OwnerHandle) -> Self {
        Self {
            owner: Some(owner),
            ..Self::new(width, length)
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the width, clamping into `[0, 100]`.
    ///
    /// Values below 0 (and NaN) become 0, values above 100 become 100, and
    /// both cases log a warning. The bounds themselves are kept as-is.
    pub fn set_width(&mut self, width: f64) {
        self.width = clamp_width(width);
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Sets the length. Unlike width, length is not range-checked.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub fn owner(&self) -> Option<&OwnerHandle> {
        self.owner.as_ref()
    }

    /// Replaces the owner. `None` leaves the room unowned.
    pub fn set_owner(&mut self, owner: Option<OwnerHandle>) {
        self.owner = owner;
    }

    /// Detaches the owner and hands it back.
    pub fn take_owner(&mut self) -> Option<OwnerHandle> {
        self.owner.take()
    }

    /// Floor area, `width * length`, untruncated.
    pub fn square_feet(&self) -> f64 {
        self.width * self.length
    }
}

fn clamp_width(requested: f64) -> f64 {
    if requested.is_nan() || requested < MIN_WIDTH {
        tracing::warn!(
            requested,
            applied = MIN_WIDTH,
            "room width below 0, assuming 0"
        );
        MIN_WIDTH
    } else if requested > MAX_WIDTH {
        tracing::warn!(
            requested,
            applied = MAX_WIDTH,
            "room width above 100, assuming 100"
        );
        MAX_WIDTH
    } else {
        requested
    }
}

/// Truncates toward zero into an `i32`. Saturates at the `i32` bounds and
/// maps NaN to 0.
fn truncate(value: f64) -> i32 {
    value as i32
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room [{}x{} | Sq.ft. {} | Owner: ",
            truncate(self.width),
            truncate(self.length),
            truncate(self.square_feet()),
        )?;
        match &self.owner {
            Some(owner) => write!(f, "{owner}]"),
            None => write!(f, "null]"),
        }
    }
}
