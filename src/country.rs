use crate::error::SsnError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Countries a social security number can be checked against.
///
/// Knowing about a country does not mean a validator exists for it, see
/// [crate::get_validator].
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    Germany,
    Austria,
    Switzerland,
    France,
    Netherlands,
    Belgium,
    Italy,
    Spain,
    Poland,
    UnitedKingdom,
}

impl Country {
    /// ISO 3166-1 alpha-2 code
    pub fn alpha2(&self) -> &'static str {
        match self {
            Country::Germany => "DE",
            Country::Austria => "AT",
            Country::Switzerland => "CH",
            Country::France => "FR",
            Country::Netherlands => "NL",
            Country::Belgium => "BE",
            Country::Italy => "IT",
            Country::Spain => "ES",
            Country::Poland => "PL",
            Country::UnitedKingdom => "GB",
        }
    }

    /// Resolves a selector given either as the variant name or as an alpha-2 code.
    pub fn from_selector(selector: &str) -> Result<Self, SsnError> {
        let selector = selector.trim();
        if let Ok(country) = Country::from_str(selector) {
            return Ok(country);
        }
        Country::iter()
            .find(|country| country.alpha2().eq_ignore_ascii_case(selector))
            .ok_or_else(|| SsnError::UnknownCountry(selector.to_string()))
    }
}
