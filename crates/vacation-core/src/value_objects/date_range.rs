//! Date range value object for vacation periods
//!
//! Both ends are calendar dates (time of day dropped), so day counting never
//! depends on time zones or daylight-saving transitions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::{DomainError, ValidationError};

/// Inclusive period between two calendar dates, start strictly before end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, requiring `start < end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start >= end {
            return Err(ValidationError::InvalidDateRange { start, end }.into());
        }
        Ok(Self { start, end })
    }

    /// Create a range from timestamps, normalizing each to its calendar date
    pub fn from_datetimes<Tz: TimeZone>(
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Self, DomainError> {
        Self::new(start.date_naive(), end.date_naive())
    }

    /// First day of the range
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Parse an ISO-8601 date or timestamp into a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date is taken in the
/// timestamp's own offset) and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}
