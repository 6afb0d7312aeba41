//! UTCTime and GeneralizedTime parsing.

use certkit_asn1::{Tag, Tlv};

use crate::error::X509Error;

/// Time ::= CHOICE { utcTime UTCTime, generalTime GeneralizedTime }
///
/// Both variants carry a UNIX timestamp (seconds since the epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Time {
    Utc(i64),
    Generalized(i64),
}

impl Time {
    pub fn timestamp(&self) -> i64 {
        match self {
            Time::Utc(value) | Time::Generalized(value) => *value,
        }
    }

    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let bytes = tlv
            .data_value()
            .ok_or_else(|| X509Error::InvalidTime(tlv.clone()))?;
        let text =
            core::str::from_utf8(bytes).map_err(|_| X509Error::InvalidTime(tlv.clone()))?;
        match tlv.identifier.tag {
            Tag::UtcTime => parse_utc_time(text)
                .map(Time::Utc)
                .ok_or_else(|| X509Error::InvalidTime(tlv.clone())),
            Tag::GeneralizedTime => parse_generalized_time(text)
                .map(Time::Generalized)
                .ok_or_else(|| X509Error::InvalidTime(tlv.clone())),
            _ => Err(X509Error::InvalidTime(tlv.clone())),
        }
    }
}

/// Parse UTCTime "YYMMDDHHMMSSZ".
/// RFC 5280: 00-49 maps to 2000-2049, 50-99 to 1950-1999.
fn parse_utc_time(text: &str) -> Option<i64> {
    let text = text.strip_suffix('Z').unwrap_or(text);
    if text.len() < 12 || !text.is_ascii() {
        return None;
    }
    let yy: u32 = text[0..2].parse().ok()?;
    let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
    let month: u32 = text[2..4].parse().ok()?;
    let day: u32 = text[4..6].parse().ok()?;
    let hour: u32 = text[6..8].parse().ok()?;
    let minute: u32 = text[8..10].parse().ok()?;
    let second: u32 = text[10..12].parse().ok()?;
    datetime_to_unix(year, month, day, hour, minute, second)
}

/// Parse GeneralizedTime "YYYYMMDDHHMMSSZ".
fn parse_generalized_time(text: &str) -> Option<i64> {
    let text = text.strip_suffix('Z').unwrap_or(text);
    if text.len() < 14 || !text.is_ascii() {
        return None;
    }
    let year: u32 = text[0..4].parse().ok()?;
    let month: u32 = text[4..6].parse().ok()?;
    let day: u32 = text[6..8].parse().ok()?;
    let hour: u32 = text[8..10].parse().ok()?;
    let minute: u32 = text[10..12].parse().ok()?;
    let second: u32 = text[12..14].parse().ok()?;
    datetime_to_unix(year, month, day, hour, minute, second)
}

/// Convert a civil date-time to a UNIX timestamp.
fn datetime_to_unix(
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<i64> {
    if year == 0
        || !(1..=12).contains(&month)
        || !(1..=31).contains(&day)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return None;
    }
    // Days from year 0 to the start of the given year (Gregorian)
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 9 } else { month - 3 };
    let days = 365 * i64::from(y) + i64::from(y) / 4 - i64::from(y) / 100
        + i64::from(y) / 400
        + (i64::from(m) * 306 + 5) / 10
        + (i64::from(day) - 1)
        - 719468; // offset so epoch = 1970-01-01
    Some(days * 86400 + i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second))
}
