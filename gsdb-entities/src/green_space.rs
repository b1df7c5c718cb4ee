use std::{fmt, str::FromStr};

use strum::EnumString;

use crate::{id::Id, image::ImageRef, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Comma-joined day tokens, e.g. `"MONDAY,TUESDAY"`.
///
/// The raw string is kept as stored; every token must name a weekday.
/// An empty string denotes no published days.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WorkingDays(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WorkingDaysParseError;

impl WorkingDays {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0
            .split(',')
            .filter_map(|token| token.trim().parse().ok())
    }
}

impl FromStr for WorkingDays {
    type Err = WorkingDaysParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self(String::new()));
        }
        for token in trimmed.split(',') {
            token
                .trim()
                .parse::<Weekday>()
                .map_err(|_| WorkingDaysParseError)?;
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<WorkingDays> for String {
    fn from(from: WorkingDays) -> Self {
        from.0
    }
}

impl From<String> for WorkingDays {
    fn from(from: String) -> Self {
        let res = Self(from);
        debug_assert_eq!(Ok(&res), res.0.as_str().parse().as_ref());
        res
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A public urban green space.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct GreenSpace {
    pub id           : Id,
    pub name         : String,
    pub entry_price  : f64,
    pub plant_info   : String,
    pub working_time : String,
    pub working_days : WorkingDays,
    pub description  : String,
    pub location     : String,
    pub facilities   : String,
    // Opaque storage references, resolved to URLs on every read.
    pub images       : Vec<ImageRef>,
    pub lat          : Option<f64>,
    pub lng          : Option<f64>,
    pub created_at   : Timestamp,
    pub updated_at   : Timestamp,
}
