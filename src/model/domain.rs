//! Business domains.
//!
//! Each domain selects a gold table, a filter contract, and a KPI set. The
//! set is closed: everything downstream matches exhaustively on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// One of the three fixed business areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Sales,
    Procurement,
    Finance,
}

impl Domain {
    /// All domains, in display order.
    pub const ALL: [Domain; 3] = [Domain::Sales, Domain::Procurement, Domain::Finance];

    /// Lowercase tag used in serialized form and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Sales => "sales",
            Domain::Procurement => "procurement",
            Domain::Finance => "finance",
        }
    }

    /// Title-case name for display.
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Sales => "Sales",
            Domain::Procurement => "Procurement",
            Domain::Finance => "Finance",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(Domain::Sales),
            "procurement" => Ok(Domain::Procurement),
            "finance" => Ok(Domain::Finance),
            other => Err(PortalError::UnknownDomain(other.to_string())),
        }
    }
}
