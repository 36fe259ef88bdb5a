use crate::config::ValidatorConfig;
use crate::country::Country;
use crate::country_validation::SsnValidator;
use crate::format::{insert_separators, Format};
use crate::normalization::to_machine_format;
use crate::observability::labels::Labels;
use crate::observability::metrics::{RejectionReason, ValidatorMetrics};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// German social insurance number (Sozialversicherungsnummer / Rentenversicherungsnummer)
///
/// Machine format `AADDMMYYBSSP`:
/// - `AA` area number of the pension insurance institution
/// - `DDMMYY` date of birth
/// - `B` first letter of the birth name
/// - `SS` serial number
/// - `P` check digit
///
/// https://de.wikipedia.org/wiki/Versicherungsnummer
pub struct GermanSvnr {
    config: ValidatorConfig,
    metrics: ValidatorMetrics,
}

const MULTIPLIERS: &[u32] = &[2, 1, 2, 5, 7, 1, 2, 1, 2, 1, 2, 1];
const MODULO: u32 = 10;
// AA DDMMYY B SS P
const HUMAN_FORMAT_OFFSETS: &[usize] = &[2, 8, 9, 11];
const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref SVNR_REGEX: Regex = Regex::new(
        r"^[0-9]{2}(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[0-2])[0-9]{2}[A-Z][0-9]{2}[0-9]$"
    )
    .unwrap();
}

impl GermanSvnr {
    pub fn new(config: ValidatorConfig) -> Self {
        GermanSvnr {
            metrics: ValidatorMetrics::new(&Labels::for_country(Country::Germany)),
            config,
        }
    }

    /// Same as [SsnValidator::verify], evaluating the date of birth against `today`.
    pub fn verify_at(&self, ssn: &str, is_already_machine_format: bool, today: NaiveDate) -> bool {
        self.metrics.verifications.increment(1);

        let ssn = machine_format(ssn, is_already_machine_format);
        match check(&ssn, today) {
            Ok(()) => {
                self.metrics.accepted.increment(1);
                true
            }
            Err(reason) => {
                self.metrics.rejected(reason).increment(1);
                tracing::debug!(
                    country = Country::Germany.alpha2(),
                    ?reason,
                    "rejected social security number"
                );
                false
            }
        }
    }

    /// The date of birth embedded in a structurally valid number, resolved against `today`.
    /// The check digit is not verified.
    pub fn birth_date_at(
        &self,
        ssn: &str,
        is_already_machine_format: bool,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let ssn = machine_format(ssn, is_already_machine_format);
        if !is_well_formed(&ssn) {
            return None;
        }
        let (day, month, year_digits) = date_fields(&ssn)?;
        resolve_birth_date(day, month, year_digits, today)
    }
}

impl SsnValidator for GermanSvnr {
    fn country(&self) -> Country {
        Country::Germany
    }

    fn verify(&self, ssn: &str, is_already_machine_format: bool) -> bool {
        self.verify_at(ssn, is_already_machine_format, self.config.today())
    }

    fn format(&self, ssn: &str, format: Format, is_already_machine_format: bool) -> String {
        let ssn = machine_format(ssn, is_already_machine_format);
        match format {
            Format::Machine => ssn.into_owned(),
            Format::Human => {
                insert_separators(&ssn, HUMAN_FORMAT_OFFSETS, &self.config.human_separator)
            }
        }
    }
}

fn machine_format(ssn: &str, is_already_machine_format: bool) -> Cow<'_, str> {
    if is_already_machine_format {
        Cow::Borrowed(ssn)
    } else {
        Cow::Owned(to_machine_format(ssn))
    }
}

fn check(ssn: &str, today: NaiveDate) -> Result<(), RejectionReason> {
    if !is_well_formed(ssn) {
        return Err(RejectionReason::Structure);
    }

    let (day, month, year_digits) = date_fields(ssn).ok_or(RejectionReason::Structure)?;
    if resolve_birth_date(day, month, year_digits, today).is_none() {
        return Err(RejectionReason::Date);
    }

    if !is_valid_checksum(ssn) {
        return Err(RejectionReason::Checksum);
    }
    Ok(())
}

/// Only checks the character classes and ranges, "3104" (April 31st) is well formed.
fn is_well_formed(ssn: &str) -> bool {
    SVNR_REGEX.is_match(ssn)
}

fn date_fields(ssn: &str) -> Option<(u32, u32, u32)> {
    let field = |range: std::ops::Range<usize>| ssn.get(range)?.parse::<u32>().ok();
    Some((field(2..4)?, field(4..6)?, field(6..8)?))
}

/// Resolves a two digit year of birth to a full date.
///
/// A person can't be born in the future, so a year after the current two digit year is
/// placed in the previous century and any other year in the current one. A February 29th
/// which doesn't exist in the current century is retried in the previous one.
pub fn resolve_birth_date(
    day: u32,
    month: u32,
    year_digits: u32,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let current_century = today.year().div_euclid(100);
    let current_year_digits = today.year().rem_euclid(100) as u32;

    let century = if year_digits > current_year_digits {
        current_century - 1
    } else {
        current_century
    };

    if let Some(birth_date) = exact_date(century, year_digits, month, day) {
        return Some(birth_date);
    }

    if day == 29 && month == 2 && century == current_century {
        return exact_date(current_century - 1, year_digits, month, day);
    }
    None
}

// The formatted date must be identical to the one that was parsed, nothing may be
// rolled over into the next month.
fn exact_date(century: i32, year_digits: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let full_birth_date = format!("{century:02}{year_digits:02}-{month:02}-{day:02}");
    let birth_date = NaiveDate::parse_from_str(&full_birth_date, DATE_FORMAT).ok()?;
    if birth_date.format(DATE_FORMAT).to_string() == full_birth_date {
        Some(birth_date)
    } else {
        None
    }
}

/// Two digit numeric value of a letter, A=1 to Z=26
pub fn letter_code(letter: char) -> Option<u32> {
    letter
        .to_digit(36)
        .filter(|value| *value >= 10)
        .map(|value| value - 9)
}

// 16 -> 1 + 6 = 7
fn fold_product(product: u32) -> u32 {
    if product > 9 {
        product / 10 + product % 10
    } else {
        product
    }
}

/// Checks the trailing check digit of a machine formatted number.
///
/// The letter at index 8 is replaced by its two digit code, which gives 12 digits before the
/// check digit, one for each multiplier.
pub fn is_valid_checksum(ssn: &str) -> bool {
    let (Some(head), Some(letter), Some(tail)) = (ssn.get(..8), ssn.get(8..9), ssn.get(9..))
    else {
        return false;
    };
    let Some(code) = letter.chars().next().and_then(letter_code) else {
        return false;
    };

    let digits =
        |part: &str| -> Option<Vec<u32>> { part.chars().map(|c| c.to_digit(10)).collect() };
    let (Some(head), Some(tail)) = (digits(head), digits(tail)) else {
        return false;
    };

    let mut elements = head;
    elements.push(code / 10);
    elements.push(code % 10);
    elements.extend(tail);

    let Some(check_digit) = elements.pop() else {
        return false;
    };
    if elements.len() != MULTIPLIERS.len() {
        return false;
    }

    let sum: u32 = elements
        .iter()
        .zip(MULTIPLIERS)
        .map(|(element, weight)| fold_product(element * weight))
        .sum();
    sum % MODULO == check_digit
}
