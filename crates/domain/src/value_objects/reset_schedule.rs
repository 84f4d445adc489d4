//! Reset schedule - when each cycle rolls over
//!
//! The game resets daily homework at a fixed local time and weekly homework at
//! the same time on one weekday. The schedule is a validated value object; the
//! controller asks it for the latest boundary at or before "now".

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime, Utc, Weekday};
use serde::Serialize;

use crate::{Cycle, DomainError};

/// Validated reset times for both cycles.
///
/// # Validation Rules
///
/// - Reset hour must be within 0..=23
/// - UTC offset must be within -12..=14 hours
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use homework_domain::value_objects::ResetSchedule;
///
/// let schedule = ResetSchedule::new(6, Weekday::Mon, 9).unwrap();
/// assert_eq!(schedule.reset_hour(), 6);
///
/// assert!(ResetSchedule::new(24, Weekday::Mon, 9).is_err());
/// assert!(ResetSchedule::new(6, Weekday::Mon, 15).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSchedule {
    reset_time: NaiveTime,
    weekly_reset_day: Weekday,
    utc_offset_hours: i32,
}

impl ResetSchedule {
    /// Default local reset hour: 06:00
    pub const DEFAULT_RESET_HOUR: u32 = 6;

    /// Default offset: UTC+9 (KST)
    pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

    pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
    pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

    /// Create a schedule resetting at `reset_hour:00` local time, weekly on
    /// `weekly_reset_day`, in a zone `utc_offset_hours` from UTC.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the hour or the offset is out of range.
    pub fn new(
        reset_hour: u32,
        weekly_reset_day: Weekday,
        utc_offset_hours: i32,
    ) -> Result<Self, DomainError> {
        let reset_time = NaiveTime::from_hms_opt(reset_hour, 0, 0).ok_or_else(|| {
            DomainError::validation(format!(
                "Reset hour must be within 0..=23, got {}",
                reset_hour
            ))
        })?;

        if !(Self::MIN_UTC_OFFSET_HOURS..=Self::MAX_UTC_OFFSET_HOURS).contains(&utc_offset_hours) {
            return Err(DomainError::validation(format!(
                "UTC offset must be within {}..={} hours, got {}",
                Self::MIN_UTC_OFFSET_HOURS,
                Self::MAX_UTC_OFFSET_HOURS,
                utc_offset_hours
            )));
        }

        Ok(Self {
            reset_time,
            weekly_reset_day,
            utc_offset_hours,
        })
    }

    #[inline]
    pub fn reset_time(&self) -> NaiveTime {
        self.reset_time
    }

    pub fn reset_hour(&self) -> u32 {
        chrono::Timelike::hour(&self.reset_time)
    }

    #[inline]
    pub fn weekly_reset_day(&self) -> Weekday {
        self.weekly_reset_day
    }

    #[inline]
    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    /// The zone offset, for formatting boundaries in local time.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
    }

    /// The most recent reset instant for `cycle` at or before `now`.
    pub fn latest_boundary(&self, cycle: Cycle, now: DateTime<Utc>) -> DateTime<Utc> {
        let offset = Duration::hours(i64::from(self.utc_offset_hours));
        let local_now = now.naive_utc() + offset;

        let mut boundary = local_now.date().and_time(self.reset_time);
        if boundary > local_now {
            boundary -= Duration::days(1);
        }

        if cycle == Cycle::Weekly {
            let days_back = (7 + boundary.weekday().num_days_from_monday()
                - self.weekly_reset_day.num_days_from_monday())
                % 7;
            boundary -= Duration::days(i64::from(days_back));
        }

        (boundary - offset).and_utc()
    }

    /// The first reset instant for `cycle` strictly after `now`.
    pub fn next_boundary(&self, cycle: Cycle, now: DateTime<Utc>) -> DateTime<Utc> {
        let period = match cycle {
            Cycle::Daily => Duration::days(1),
            Cycle::Weekly => Duration::weeks(1),
        };
        self.latest_boundary(cycle, now) + period
    }
}

impl Default for ResetSchedule {
    fn default() -> Self {
        Self {
            reset_time: NaiveTime::default() + Duration::hours(i64::from(Self::DEFAULT_RESET_HOUR)),
            weekly_reset_day: Weekday::Mon,
            utc_offset_hours: Self::DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}
