//! Error types for calendar and Julian Day conversions.

use thiserror::Error;

/// Errors from civil-time validation or conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field (year, month, day, clock field or timezone offset)
    /// is outside its valid range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl TimeError {
    pub(crate) fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let e = TimeError::invalid_date("month 13 outside 1..=12");
        assert_eq!(e.to_string(), "invalid date: month 13 outside 1..=12");
    }
}
