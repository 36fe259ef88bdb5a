// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod country;
mod country_validation;
mod error;
mod facade;
mod format;
mod normalization;
mod observability;

// This is the public API of the SSN validation library
pub use config::{ValidatorConfig, DEFAULT_HUMAN_SEPARATOR};
pub use country::Country;
pub use country_validation::{
    get_validator, get_validator_with_config, is_valid_checksum, letter_code, resolve_birth_date,
    GermanSvnr, SsnValidator,
};
pub use error::SsnError;
pub use facade::{format, get_country_validator, verify};
pub use format::Format;
pub use normalization::to_machine_format;
