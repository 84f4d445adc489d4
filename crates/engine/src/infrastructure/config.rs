//! Engine configuration from environment variables.
//!
//! Supported environment variables:
//! - HOMEWORK_ALT_SLOTS: number of alt characters tracked beside the main (0-3, default 3)
//! - HOMEWORK_RESET_HOUR: local hour of the daily reset (0-23, default 6)
//! - HOMEWORK_WEEKLY_RESET_DAY: weekday of the weekly reset (mon..sun, default mon)
//! - HOMEWORK_UTC_OFFSET_HOURS: offset of the reset zone from UTC (-12..14, default 9)
//!
//! Invalid values are logged and ignored; the default is used instead.

use std::str::FromStr;

use chrono::Weekday;
use homework_domain::{Character, ResetSchedule, Roster};

pub const ALT_SLOTS_VAR: &str = "HOMEWORK_ALT_SLOTS";
pub const RESET_HOUR_VAR: &str = "HOMEWORK_RESET_HOUR";
pub const WEEKLY_RESET_DAY_VAR: &str = "HOMEWORK_WEEKLY_RESET_DAY";
pub const UTC_OFFSET_VAR: &str = "HOMEWORK_UTC_OFFSET_HOURS";

/// Settings fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub roster: Roster,
    pub schedule: ResetSchedule,
}

impl EngineConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which returns the raw value of a variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ResetSchedule::default();

        let alt_slots = parse_in_range(
            &lookup,
            ALT_SLOTS_VAR,
            0u8..=Character::ALT_SLOTS,
            Character::ALT_SLOTS,
        );
        let reset_hour = parse_in_range(&lookup, RESET_HOUR_VAR, 0u32..=23, defaults.reset_hour());
        let utc_offset = parse_in_range(
            &lookup,
            UTC_OFFSET_VAR,
            ResetSchedule::MIN_UTC_OFFSET_HOURS..=ResetSchedule::MAX_UTC_OFFSET_HOURS,
            defaults.utc_offset_hours(),
        );
        let weekly_reset_day = match lookup(WEEKLY_RESET_DAY_VAR) {
            Some(val) => match Weekday::from_str(val.trim()) {
                Ok(day) => {
                    tracing::info!(day = %day, "Applied {} environment variable", WEEKLY_RESET_DAY_VAR);
                    day
                }
                Err(_) => {
                    tracing::warn!(val = %val, "{} is not a weekday, ignoring", WEEKLY_RESET_DAY_VAR);
                    defaults.weekly_reset_day()
                }
            },
            None => defaults.weekly_reset_day(),
        };

        let roster = Roster::with_alt_slots(alt_slots).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid roster size, tracking every slot");
            Roster::default()
        });
        let schedule = ResetSchedule::new(reset_hour, weekly_reset_day, utc_offset)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Invalid reset schedule, using default");
                defaults
            });

        Self { roster, schedule }
    }
}

fn parse_in_range<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    range: std::ops::RangeInclusive<T>,
    default: T,
) -> T
where
    T: FromStr + PartialOrd + std::fmt::Display + Copy,
{
    let Some(val) = lookup(key) else {
        return default;
    };

    match val.trim().parse::<T>() {
        Ok(parsed) if range.contains(&parsed) => {
            tracing::info!(value = %parsed, "Applied {} environment variable", key);
            parsed
        }
        Ok(parsed) => {
            tracing::warn!(
                value = %parsed,
                "{} out of range [{}, {}], ignoring",
                key,
                range.start(),
                range.end()
            );
            default
        }
        Err(_) => {
            tracing::warn!(val = %val, "{} is not a valid number, ignoring", key);
            default
        }
    }
}
