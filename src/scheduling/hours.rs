use crate::scheduling::constants::*;
use anyhow::{Result, bail};
use chrono::{Days, NaiveDate};

/// Knobs for the gap/utilization calculator.
///
/// Business hours are a single window shared by every operatory and every
/// day; there is no holiday or closure calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    open_hour: u32,
    close_hour: u32,
    min_gap_minutes: u32,
    lookahead_days: u32,
    gap_limit: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            open_hour: DEFAULT_OPEN_HOUR,
            close_hour: DEFAULT_CLOSE_HOUR,
            min_gap_minutes: DEFAULT_MIN_GAP_MINUTES,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            gap_limit: DEFAULT_GAP_LIMIT,
        }
    }
}

impl ScheduleConfig {
    pub fn new(
        open_hour: u32,
        close_hour: u32,
        min_gap_minutes: u32,
        lookahead_days: u32,
        gap_limit: usize,
    ) -> Result<Self> {
        if close_hour > HOURS_PER_DAY {
            bail!("close hour {close_hour} is past midnight");
        }
        if open_hour >= close_hour {
            bail!("open hour {open_hour} must be before close hour {close_hour}");
        }
        if min_gap_minutes == 0 {
            bail!("minimum gap must be at least one minute");
        }
        if lookahead_days == 0 {
            bail!("lookahead must cover at least one day");
        }
        if lookahead_days > MAX_LOOKAHEAD_DAYS {
            bail!("lookahead of {lookahead_days} days exceeds {MAX_LOOKAHEAD_DAYS}");
        }
        if gap_limit == 0 {
            bail!("gap limit must be at least one");
        }

        Ok(ScheduleConfig {
            open_hour,
            close_hour,
            min_gap_minutes,
            lookahead_days,
            gap_limit,
        })
    }

    /// Opening time in minutes after midnight
    pub fn open_minute(&self) -> u32 {
        self.open_hour * MINUTES_PER_HOUR
    }

    /// Closing time in minutes after midnight
    pub fn close_minute(&self) -> u32 {
        self.close_hour * MINUTES_PER_HOUR
    }

    /// Length of the business day in minutes
    pub fn span_minutes(&self) -> u32 {
        self.close_minute() - self.open_minute()
    }

    pub fn min_gap_minutes(&self) -> u32 {
        self.min_gap_minutes
    }

    pub fn lookahead_days(&self) -> u32 {
        self.lookahead_days
    }

    pub fn gap_limit(&self) -> usize {
        self.gap_limit
    }

    /// Days covered by a query anchored at `anchor`, in ascending order.
    /// Stops early at the end of the representable calendar.
    pub fn window(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        (0..self.lookahead_days)
            .map_while(|offset| anchor.checked_add_days(Days::new(u64::from(offset))))
            .collect()
    }

    /// Last day (inclusive) of the window anchored at `anchor`
    pub fn window_end(&self, anchor: NaiveDate) -> NaiveDate {
        anchor
            .checked_add_days(Days::new(u64::from(self.lookahead_days - 1)))
            .unwrap_or(NaiveDate::MAX)
    }
}
