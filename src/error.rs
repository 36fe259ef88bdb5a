use crate::country::Country;
use thiserror::Error;

/// Failures of the country dispatch.
///
/// A number that fails verification is never an error, `verify` simply returns `false`.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum SsnError {
    /// The country is known but no validator is registered for it
    #[error("Unsupported country: {0}")]
    UnsupportedCountry(Country),

    /// The selector does not name any known country
    #[error("Unknown country selector: {0:?}")]
    UnknownCountry(String),
}

#[cfg(test)]
mod test {
    use crate::country::Country;
    use crate::error::SsnError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SsnError::UnsupportedCountry(Country::France).to_string(),
            "Unsupported country: France"
        );
        assert_eq!(
            SsnError::UnknownCountry("XX".to_string()).to_string(),
            "Unknown country selector: \"XX\""
        );
    }
}
