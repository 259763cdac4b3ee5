// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar intervals for discrete time axes.
//!
//! Time is modelled as [`NaiveDateTime`] in platform-local time; there is no timezone
//! handling. An interval knows how to:
//! - floor a timestamp to the start of its period,
//! - step forward by whole periods, and
//! - format a period start as a tick label.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::AxisError;

/// Upper bound on the number of periods generated for one axis.
pub const MAX_PERIODS: usize = 10_000;

/// The calendar period a time axis is divided into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInterval {
    /// One clock hour.
    Hour,
    /// One calendar day.
    Day,
    /// One ISO week, starting on Monday.
    Week,
    /// One calendar month.
    Month,
    /// Three calendar months, starting in January, April, July or October.
    Quarter,
    /// One calendar year.
    Year,
}

impl TimeInterval {
    /// Returns the lowercase interval name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Returns the start of the period containing `t`.
    pub fn floor(self, t: NaiveDateTime) -> NaiveDateTime {
        let date = t.date();
        let start = match self {
            Self::Hour => return date.and_hms_opt(t.hour(), 0, 0).unwrap_or(t),
            Self::Day => date,
            Self::Week => date
                .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
                .unwrap_or(date),
            Self::Month => date.with_day(1).unwrap_or(date),
            Self::Quarter => {
                let month = (date.month0() / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
            }
            Self::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        };
        start.and_time(NaiveTime::default())
    }

    /// Steps `t` forward by `steps` whole periods.
    ///
    /// Returns `None` if the result is outside chrono's representable range.
    pub fn offset(self, t: NaiveDateTime, steps: u32) -> Option<NaiveDateTime> {
        let n = i64::from(steps);
        match self {
            Self::Hour => TimeDelta::try_hours(n).and_then(|d| t.checked_add_signed(d)),
            Self::Day => TimeDelta::try_days(n).and_then(|d| t.checked_add_signed(d)),
            Self::Week => TimeDelta::try_weeks(n).and_then(|d| t.checked_add_signed(d)),
            Self::Month => t.checked_add_months(Months::new(steps)),
            Self::Quarter => t.checked_add_months(Months::new(steps.checked_mul(3)?)),
            Self::Year => t.checked_add_months(Months::new(steps.checked_mul(12)?)),
        }
    }

    /// Formats a period start as a tick label.
    ///
    /// | interval | example       |
    /// |----------|---------------|
    /// | hour     | `Mar 05 14:00` |
    /// | day      | `Mar 05`      |
    /// | week     | `W10`         |
    /// | month    | `Mar 24`      |
    /// | quarter  | `Q1 2024`     |
    /// | year     | `2024`        |
    pub fn format(self, t: NaiveDateTime) -> String {
        match self {
            Self::Hour => t.format("%b %d %H:00").to_string(),
            Self::Day => t.format("%b %d").to_string(),
            Self::Week => format!("W{}", t.iso_week().week()),
            Self::Month => t.format("%b %y").to_string(),
            Self::Quarter => format!("Q{} {}", t.month0() / 3 + 1, t.year()),
            Self::Year => t.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeInterval {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(AxisError::UnsupportedInterval(String::from(other))),
        }
    }
}

/// Returns every period start from the period containing `start` up to and including the
/// period containing `end`.
///
/// Reversed bounds are swapped. The sequence is capped at [`MAX_PERIODS`].
pub fn ticks_in_domain(
    start: NaiveDateTime,
    end: NaiveDateTime,
    interval: TimeInterval,
) -> Vec<NaiveDateTime> {
    let (start, end) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    let last = interval.floor(end);
    let mut out = Vec::new();
    let mut t = interval.floor(start);
    while t <= last {
        if out.len() == MAX_PERIODS {
            tracing::warn!(%interval, "time domain truncated to {MAX_PERIODS} periods");
            break;
        }
        out.push(t);
        match interval.offset(t, 1) {
            Some(next) => t = next,
            None => break,
        }
    }
    out
}
