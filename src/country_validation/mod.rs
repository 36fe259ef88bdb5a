mod german_svnr;

pub use crate::country_validation::german_svnr::{
    is_valid_checksum, letter_code, resolve_birth_date, GermanSvnr,
};
use crate::config::ValidatorConfig;
use crate::country::Country;
use crate::error::SsnError;
use crate::format::Format;

/// A social security number validator for a single country.
///
/// `is_already_machine_format` skips normalization when the caller guarantees the input
/// only contains upper-case ASCII letters and digits.
pub trait SsnValidator: Send + Sync {
    fn country(&self) -> Country;

    /// Checks the structure, any embedded data and the check digit(s) of a number.
    /// Malformed input returns `false`, never an error.
    fn verify(&self, ssn: &str, is_already_machine_format: bool) -> bool;

    fn format(&self, ssn: &str, format: Format, is_already_machine_format: bool) -> String;
}

/// Returns the validator registered for `country` using the default configuration
pub fn get_validator(country: Country) -> Result<Box<dyn SsnValidator>, SsnError> {
    get_validator_with_config(country, &ValidatorConfig::default())
}

pub fn get_validator_with_config(
    country: Country,
    config: &ValidatorConfig,
) -> Result<Box<dyn SsnValidator>, SsnError> {
    match country {
        Country::Germany => Ok(Box::new(GermanSvnr::new(config.clone()))),
        Country::Austria
        | Country::Switzerland
        | Country::France
        | Country::Netherlands
        | Country::Belgium
        | Country::Italy
        | Country::Spain
        | Country::Poland
        | Country::UnitedKingdom => Err(SsnError::UnsupportedCountry(country)),
    }
}

#[cfg(test)]
mod test {
    use crate::country::Country;
    use crate::country_validation::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_germany_is_registered() {
        let validator = get_validator(Country::Germany).unwrap();
        assert_eq!(validator.country(), Country::Germany);
    }

    #[test]
    fn test_unsupported_countries() {
        for country in Country::iter().filter(|c| *c != Country::Germany) {
            match get_validator(country) {
                Err(err) => assert_eq!(err, SsnError::UnsupportedCountry(country)),
                Ok(_) => panic!("{country} should not have a validator"),
            }
        }
    }

    #[test]
    fn test_config_is_passed_to_validator() {
        let config = ValidatorConfig::default().human_separator("-");
        let validator = get_validator_with_config(Country::Germany, &config).unwrap();
        assert_eq!(
            validator.format("15070649C103", Format::Human, true),
            "15-070649-C-10-3"
        );
    }
}
