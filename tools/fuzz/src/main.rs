use afl::fuzz;
use chrono::NaiveDate;
use ssn_validation::{to_machine_format, Format, GermanSvnr, SsnValidator, ValidatorConfig};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

// Input is `<ssn>,<days since 1900-01-01 as big endian bytes>`
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (ssn, day_offset) = split_bytes_once(bytes)?;
    let ssn_str = std::str::from_utf8(ssn).ok()?;

    let mut days: u64 = 0;
    for byte in day_offset.iter().take(2) {
        days <<= 8;
        days += *byte as u64;
    }
    let today = NaiveDate::from_ymd_opt(1900, 1, 1)?.checked_add_days(chrono::Days::new(days))?;

    run_fuzz(ssn_str, today);
    Some(())
}

fn run_fuzz(ssn: &str, today: NaiveDate) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", ssn);
        println!("Today: {:?}", today);
    }

    let svnr = GermanSvnr::new(ValidatorConfig::default());

    let machine = svnr.format(ssn, Format::Machine, false);
    assert_eq!(to_machine_format(&machine), machine);

    let human = svnr.format(&machine, Format::Human, true);
    assert_eq!(to_machine_format(&human), machine);

    let is_valid = svnr.verify_at(ssn, false, today);
    assert_eq!(svnr.verify_at(&machine, true, today), is_valid);
    assert_eq!(svnr.verify_at(&human, false, today), is_valid);

    if is_valid {
        assert!(svnr.birth_date_at(ssn, false, today).is_some());
    }
}
