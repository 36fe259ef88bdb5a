/// Converts raw input to the machine format: every character that is not an ASCII
/// letter or digit is dropped and letters are upper-cased.
///
/// Nothing is validated here, the result may have any length.
pub fn to_machine_format(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
