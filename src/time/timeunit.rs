use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref LITERAL_REGEX: Regex =
        Regex::new(r"^(?P<value>\d+)\s*(?P<unit>[a-z]*)$").expect("Regex compilation error");
}

/// A human-readable duration as written in manifest files, e.g. "250ms" or
/// "30s". A bare number is read as whole seconds, matching the timeout fields
/// of the original harness configurations.
pub struct DurationLiteral {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, PartialEq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl FromStr for DurationLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = LITERAL_REGEX
            .captures(s.trim())
            .ok_or_else(|| Error::Syntax(s.to_owned()))?;
        let value = caps["value"]
            .parse()
            .map_err(|_| Error::Syntax(s.to_owned()))?;
        let unit = match &caps["unit"] {
            "" => TimeUnit::Second,
            unit => unit.parse::<TimeUnit>()?,
        };
        Ok(Self { value, unit })
    }
}

impl From<DurationLiteral> for Duration {
    fn from(literal: DurationLiteral) -> Self {
        match literal.unit {
            TimeUnit::Millisecond => Duration::from_millis(literal.value),
            TimeUnit::Second => Duration::from_secs(literal.value),
            TimeUnit::Minute => Duration::from_secs(literal.value * 60),
            TimeUnit::Hour => Duration::from_secs(literal.value * 60 * 60),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" | "millisecond" | "millis" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "second" | "secs" | "seconds" => Ok(TimeUnit::Second),
            "m" | "minute" | "mins" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            _ => Err(Error::UnitNotSupported(s.to_owned())),
        }
    }
}
