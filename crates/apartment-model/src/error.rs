//! Error types for the model layer.

/// Errors that can occur while building or updating model entities.
///
/// Out-of-range room widths are not errors: they are clamped and logged
/// at `warn` level, and the setter always succeeds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The phone value is not a finite number.
    ///
    /// Carries the rejected input exactly as the caller supplied it.
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_message_quotes_input() {
        let err = ModelError::InvalidPhone("555-CALL".into());
        assert_eq!(err.to_string(), "invalid phone number: \"555-CALL\"");
    }
}
