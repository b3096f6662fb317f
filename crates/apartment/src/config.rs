//! Furnishing configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ApartmentError;

// ---------------------------------------------------------------------------
// FurnishConfig
// ---------------------------------------------------------------------------

/// Settings for [`crate::furnish`].
///
/// Every field has a default, so a JSON override file only needs the
/// fields it changes:
///
/// ```json
/// { "room_count": 4, "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnishConfig {
    /// How many rooms to create.
    pub room_count: usize,

    /// Name of the owner shared by all management rooms.
    pub management_name: String,

    /// Phone number of the management owner.
    pub management_phone: f64,

    /// Probability, in `[0, 1]`, that a room goes to management rather
    /// than to an individual owner.
    pub management_share: f64,

    /// Fixed RNG seed. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for FurnishConfig {
    fn default() -> Self {
        Self {
            room_count: 15,
            management_name: "Management".to_string(),
            management_phone: 5_550_000_000.0,
            management_share: 0.5,
            seed: None,
        }
    }
}

impl FurnishConfig {
    /// Parses a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ApartmentError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON override from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ApartmentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded furnish config");
        Self::from_json(&json)
    }

    /// Checks that `management_share` is a probability.
    pub fn validate(&self) -> Result<(), ApartmentError> {
        if !(0.0..=1.0).contains(&self.management_share) {
            return Err(ApartmentError::Config(format!(
                "management_share must be within [0, 1], got {}",
                self.management_share
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FurnishConfig::default();
        assert_eq!(config.room_count, 15);
        assert_eq!(config.management_name, "Management");
        assert_eq!(config.management_phone, 5550000000.0);
        assert_eq!(config.management_share, 0.5);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_keeps_defaults_for_missing_fields() {
        let config = FurnishConfig::from_json(r#"{ "room_count": 4, "seed": 7 }"#).unwrap();
        assert_eq!(config.room_count, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.management_name, "Management");
        assert_eq!(config.management_share, 0.5);
    }

    #[test]
    fn test_from_json_rejects_bad_share() {
        let err = FurnishConfig::from_json(r#"{ "management_share": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ApartmentError::Config(_)));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = FurnishConfig::from_json("{ room_count: ").unwrap_err();
        assert!(matches!(err, ApartmentError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = FurnishConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ApartmentError::Io(_)));
    }
}
