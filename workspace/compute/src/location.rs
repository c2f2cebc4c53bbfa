use std::fmt;

use crate::error::{DashboardError, Result};

/// A non-empty, trimmed district identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DashboardError::EmptyLocation);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// File name offered to the browser for a district's PDF report.
pub fn report_filename(location: &Location) -> String {
    format!("Deforestation_Report_{}.pdf", location.as_str())
}
