use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CompassError;
use crate::graph::NodeId;
use crate::schedule::ClassCode;

/// Eight-digit student identifier (UFID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentId {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(StudentId(s.to_string()))
        } else {
            Err(CompassError::invalid_value("student id (expected 8 digits)", s))
        }
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name: non-empty, ASCII letters and spaces only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StudentName(String);

impl StudentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StudentName {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            Ok(StudentName(s.to_string()))
        } else {
            Err(CompassError::invalid_value("student name", s))
        }
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: StudentName,
    pub residence: NodeId,
    /// Iterates in code order
    pub classes: BTreeSet<ClassCode>,
}
