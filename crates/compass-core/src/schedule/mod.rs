//! Classes, times of day, and schedule feasibility checks

pub mod evaluate;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CompassError;
use crate::graph::NodeId;

pub use evaluate::{verify_schedule, ScheduleCheck, Transition};

static CLASS_CODE: OnceLock<Option<Regex>> = OnceLock::new();

fn class_code_pattern() -> Option<&'static Regex> {
    CLASS_CODE
        .get_or_init(|| match Regex::new(r"^[A-Z]{3}[0-9]{4}$") {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "failed to compile class code pattern");
                None
            }
        })
        .as_ref()
}

/// Course code: three uppercase letters followed by four digits (e.g. `COP3530`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassCode(String);

impl ClassCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(code: &str) -> bool {
        class_code_pattern().is_some_and(|re| re.is_match(code))
    }
}

impl FromStr for ClassCode {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ClassCode::is_valid(s) {
            Ok(ClassCode(s.to_string()))
        } else {
            Err(CompassError::invalid_value("class code", s))
        }
    }
}

impl Borrow<str> for ClassCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Time of day in minutes since midnight (0-1439)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Signed difference `self - earlier` in minutes
    pub fn minutes_since(&self, earlier: ClockTime) -> i64 {
        i64::from(self.minutes()) - i64::from(earlier.minutes())
    }
}

/// Parses `HH:MM` (exactly five characters, 24-hour clock)
impl FromStr for ClockTime {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CompassError::invalid_value("time (expected HH:MM)", s);

        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        if hours >= 24 || minutes >= 60 {
            return Err(invalid());
        }

        Ok(ClockTime(hours * 60 + minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A scheduled class meeting at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub code: ClassCode,
    pub location: NodeId,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Class code → class, loaded once and never mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: HashMap<ClassCode, ClassInfo>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a class; returns the replaced entry
    pub fn insert(&mut self, class: ClassInfo) -> Option<ClassInfo> {
        self.classes.insert(class.code.clone(), class)
    }

    pub fn get(&self, code: &str) -> Option<&ClassInfo> {
        self.classes.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.classes.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }
}
