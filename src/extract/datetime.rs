//! EDIFACT date/time values (data element 2380) by format code (2379).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// CCYYMMDD
pub const FORMAT_DATE: &str = "102";
/// CCYYMMDDHHMM
pub const FORMAT_DATE_TIME: &str = "203";
/// CCYYMMDDHHMMZZZ, ZZZ being a signed UTC offset in hours
pub const FORMAT_DATE_TIME_OFFSET: &str = "303";

/// Parse a DTM value according to its format code.
///
/// Values without an offset are taken as UTC. Returns `None` for unknown
/// format codes and malformed values.
pub fn parse_edifact_datetime(value: &str, format_code: &str) -> Option<DateTime<FixedOffset>> {
    let utc = FixedOffset::east_opt(0)?;

    match format_code {
        FORMAT_DATE => {
            let date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()?;
            date.and_hms_opt(0, 0, 0)?.and_local_timezone(utc).single()
        }
        FORMAT_DATE_TIME => {
            let naive = NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M").ok()?;
            naive.and_local_timezone(utc).single()
        }
        FORMAT_DATE_TIME_OFFSET => {
            let (local, zone) = (value.get(..12)?, value.get(12..)?);
            let naive = NaiveDateTime::parse_from_str(local, "%Y%m%d%H%M").ok()?;
            naive.and_local_timezone(parse_offset(zone)?).single()
        }
        _ => None,
    }
}

/// `+01`, `-05` or `+0530` style offsets
fn parse_offset(zone: &str) -> Option<FixedOffset> {
    let sign = match zone.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits = &zone[1..];
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
