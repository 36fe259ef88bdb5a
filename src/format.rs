use serde::{Deserialize, Serialize};

/// Output representation of a social security number
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Upper-case alphanumerics only, no separators
    #[default]
    Machine,
    /// Separators inserted between the fields of the number
    Human,
}

/// Inserts `separator` at each of the byte `offsets` of `machine`.
///
/// Offsets refer to the unmodified string and are applied from the highest down, so a
/// lower offset is never shifted by an earlier insertion. Offsets past the end append.
pub(crate) fn insert_separators(machine: &str, offsets: &[usize], separator: &str) -> String {
    let mut sorted_offsets = offsets.to_vec();
    sorted_offsets.sort_unstable_by(|a, b| b.cmp(a));

    let mut output = machine.to_string();
    for offset in sorted_offsets {
        let mut index = offset.min(machine.len());
        while !output.is_char_boundary(index) {
            index -= 1;
        }
        output.insert_str(index, separator);
    }
    output
}
