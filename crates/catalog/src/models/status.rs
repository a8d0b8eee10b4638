use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::sanitize;
use crate::error::{Error, ErrorKind};

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// On the shelf, can be lent out.
    #[default]
    Available,
    /// Currently lent out.
    Issued,
}
impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Issued => "Issued",
        }
    }
}
impl FromStr for Status {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match sanitize(s).as_str() {
            "available" => Self::Available,
            "issued" => Self::Issued,
            _ => exn::bail!(ErrorKind::ParseError { field: "status", value: s.to_string() }),
        })
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
