//! RFC 3339 timestamps as the Statuspage API writes them.
//!
//! A decoded [`Timestamp`] remembers how many fractional-second digits it was
//! written with, its date/time separator (`T`, `t` or a space) and how its zone
//! was spelled (`Z`, `z`, `-00:00` or a numeric offset), so re-encoding
//! reproduces the original string. Absent values are modelled as `Option<Timestamp>`: JSON
//! `null` decodes to `None` and `None` encodes to `null`.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const MAX_SUBSEC_DIGITS: u8 = 9;

#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    subsec_digits: u8,
    separator: char,
    zone: Zone,
}

/// How the zone designator was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Zulu,
    LowerZulu,
    /// `-00:00`: UTC with the local offset unknown.
    UnknownLocal,
    Offset,
}

impl Zone {
    fn of(s: &str) -> Self {
        if s.ends_with('Z') {
            Zone::Zulu
        } else if s.ends_with('z') {
            Zone::LowerZulu
        } else if s.ends_with("-00:00") {
            Zone::UnknownLocal
        } else {
            Zone::Offset
        }
    }
}

impl Timestamp {
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let instant = DateTime::parse_from_rfc3339(s)?;
        let separator = match s.as_bytes().get(10) {
            Some(b't') => 't',
            Some(b' ') => ' ',
            _ => 'T',
        };
        Ok(Self {
            instant,
            subsec_digits: count_subsec_digits(s),
            separator,
            zone: Zone::of(s),
        })
    }

    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}

/// Digits after the seconds field, e.g. `3` for `2024-01-01T00:00:00.123Z`.
fn count_subsec_digits(s: &str) -> u8 {
    let Some(rest) = s.get(19..) else {
        return 0;
    };
    let Some(fraction) = rest.strip_prefix('.') else {
        return 0;
    };
    let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
    digits.min(MAX_SUBSEC_DIGITS as usize) as u8
}

impl From<DateTime<Utc>> for Timestamp {
    /// Millisecond precision with a `Z` zone, the provider's own output format.
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            instant: value.fixed_offset(),
            subsec_digits: 3,
            separator: 'T',
            zone: Zone::Zulu,
        }
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        let zone = if value.offset().local_minus_utc() == 0 {
            Zone::Zulu
        } else {
            Zone::Offset
        };
        Self {
            instant: value,
            subsec_digits: 3,
            separator: 'T',
            zone,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.instant.format("%Y-%m-%d"),
            self.separator,
            self.instant.format("%H:%M:%S")
        )?;

        if self.subsec_digits > 0 {
            let nanos = format!("{:09}", self.instant.nanosecond() % 1_000_000_000);
            write!(f, ".{}", &nanos[..self.subsec_digits as usize])?;
        }

        let utc = self.instant.offset().local_minus_utc() == 0;
        match self.zone {
            Zone::Zulu if utc => f.write_str("Z"),
            Zone::LowerZulu if utc => f.write_str("z"),
            Zone::UnknownLocal if utc => f.write_str("-00:00"),
            _ => write!(f, "{}", self.instant.format("%:z")),
        }
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Equality and ordering follow the instant alone; formatting details are ignored.
impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 date-time string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(|e| E::custom(format!("invalid timestamp {v:?}: {e}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TimestampVisitor)
    }
}
