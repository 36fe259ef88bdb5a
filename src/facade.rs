use crate::country::Country;
use crate::country_validation::{get_validator, SsnValidator};
use crate::error::SsnError;
use crate::format::Format;

/// Verifies `ssn` with the validator of `country`.
///
/// Only an unsupported country is an error, an invalid number returns `Ok(false)`.
pub fn verify(
    ssn: &str,
    country: Country,
    is_already_machine_format: bool,
) -> Result<bool, SsnError> {
    let validator = get_validator(country)?;
    Ok(validator.verify(ssn, is_already_machine_format))
}

/// Renders `ssn` in the requested [Format] with the validator of `country`.
/// The number is not verified.
pub fn format(
    ssn: &str,
    country: Country,
    format: Format,
    is_already_machine_format: bool,
) -> Result<String, SsnError> {
    let validator = get_validator(country)?;
    Ok(validator.format(ssn, format, is_already_machine_format))
}

pub fn get_country_validator(country: Country) -> Result<Box<dyn SsnValidator>, SsnError> {
    get_validator(country)
}
