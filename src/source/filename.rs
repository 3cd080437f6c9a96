//! Date extraction from log filenames
//!
//! Accepts `20251107.md`, `20251107星期五.md`, `notes_20251107_retro.md` and so on:
//! the first run of eight ASCII digits is read as `YYYYMMDD`.

use chrono::NaiveDate;

use crate::consts::LOG_SUFFIX;

const DATE_DIGITS: usize = 8;

/// Recover the calendar date embedded in a filename.
///
/// Returns `None` when there is no 8-digit run or the first one is not a real
/// date. Later runs are not tried.
pub(crate) fn parse_filename_date(filename: &str) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(LOG_SUFFIX).unwrap_or(filename);
    let digits = first_digit_run(stem.as_bytes())?;

    let year = parse_digits(&digits[0..4])? as i32;
    let month = parse_digits(&digits[4..6])?;
    let day = parse_digits(&digits[6..8])?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First position holding eight consecutive ASCII digits
fn first_digit_run(bytes: &[u8]) -> Option<&[u8]> {
    if bytes.len() < DATE_DIGITS {
        return None;
    }
    (0..=bytes.len() - DATE_DIGITS)
        .map(|i| &bytes[i..i + DATE_DIGITS])
        .find(|window| window.iter().all(u8::is_ascii_digit))
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, b| {
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}
