//! Owners and the shared handle rooms use to reference them.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Name given to owners constructed without one.
const DEFAULT_NAME: &str = "No Owner";

/// What [`Owner::phone`] returns when no phone is on record.
const UNKNOWN_PHONE: &str = "Unknown";

// ---------------------------------------------------------------------------
// PhoneInput
// ---------------------------------------------------------------------------

/// A phone number as handed to [`Owner::with_phone`].
///
/// Numbers are taken as-is; text is parsed. Both must end up finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhoneInput<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for PhoneInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for PhoneInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl PhoneInput<'_> {
    fn resolve(self) -> Result<f64, ModelError> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(value),
            Self::Number(value) => Err(ModelError::InvalidPhone(value.to_string())),
            Self::Text(text) => parse_phone(text),
        }
    }
}

fn parse_phone(text: &str) -> Result<f64, ModelError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ModelError::InvalidPhone(text.to_string())),
    }
}

/// Renders a phone value the way C's `"%4.0f"` does: fixed notation, no
/// decimals, right-justified in at least four columns. Halves round away
/// from zero.
fn format_phone(value: f64) -> String {
    format!("{:>4.0}", value.round())
}

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

/// A person or organization that may hold any number of rooms.
///
/// The phone is optional: `None` means "unknown", and [`Owner::phone`]
/// reports it as the text `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    name: String,
    phone: Option<f64>,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: None,
        }
    }
}

impl Owner {
    /// Creates an owner with no phone on record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
        }
    }

    /// Creates an owner with a phone number.
    ///
    /// Accepts either a number or text; text is trimmed and parsed.
    ///
    /// ```rust
    /// use apartment_model::Owner;
    ///
    /// let owner = Owner::with_phone("John Doe", 2125551234.0).unwrap();
    /// assert_eq!(owner.to_string(), "Owner [John Doe | 2125551234]");
    ///
    /// assert!(Owner::with_phone("John Doe", "not a phone").is_err());
    /// ```
    pub fn with_phone<'a>(
        name: impl Into<String>,
        phone: impl Into<PhoneInput<'a>>,
    ) -> Result<Self, ModelError> {
        let phone = phone.into().resolve()?;
        Ok(Self {
            name: name.into(),
            phone: Some(phone),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The phone formatted for display, or `Unknown` when absent.
    pub fn phone(&self) -> String {
        match self.phone {
            Some(value) => format_phone(value),
            None => UNKNOWN_PHONE.to_string(),
        }
    }

    /// The raw phone value, if one is on record.
    pub fn phone_number(&self) -> Option<f64> {
        self.phone
    }

    /// Parses `phone` and stores it.
    ///
    /// On error the previous phone is kept.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), ModelError> {
        let value = parse_phone(phone)?;
        tracing::debug!(name = %self.name, phone = value, "owner phone updated");
        self.phone = Some(value);
        Ok(())
    }

    pub fn clear_phone(&mut self) {
        self.phone = None;
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner [{} | {}]", self.name, self.phone())
    }
}

// ---------------------------------------------------------------------------
// OwnerHandle
// ---------------------------------------------------------------------------

/// A shared reference to one [`Owner`].
///
/// Cloning the handle does not copy the owner: every clone points at the
/// same `Owner`, so an edit made through one clone is seen by all of them.
/// This is how several rooms share a single owner.
///
/// The handle is `Rc<RefCell<_>>` underneath. Holding a [`borrow_mut`]
/// guard while reading through another clone (or printing a room that
/// holds one) panics, exactly like `RefCell`.
///
/// [`borrow_mut`]: OwnerHandle::borrow_mut
#[derive(Debug, Clone)]
pub struct OwnerHandle(Rc<RefCell<Owner>>);

impl OwnerHandle {
    pub fn new(owner: Owner) -> Self {
        Self(Rc::new(RefCell::new(owner)))
    }

    /// Read access to the shared owner.
    pub fn borrow(&self) -> Ref<'_, Owner> {
        self.0.borrow()
    }

    /// Write access to the shared owner. Changes are visible through
    /// every clone of this handle.
    pub fn borrow_mut(&self) -> RefMut<'_, Owner> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point at the same owner.
    ///
    /// Two distinct owners with equal fields are not the same owner.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// How many handles (this one included) currently share the owner.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl From<Owner> for OwnerHandle {
    fn from(owner: Owner) -> Self {
        Self::new(owner)
    }
}

impl fmt::Display for OwnerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}
