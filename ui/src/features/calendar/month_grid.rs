use chrono::{Datelike, Days, NaiveDate};
use std::ops::RangeInclusive;

use crate::services::config::CalendarConfig;

const DAYS_PER_WEEK: usize = 7;

/// A year and 1-based month pair used for month navigation
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn with_month(&self, month: u32) -> Option<Self> {
        Self::new(self.year, month)
    }

    pub fn with_year(&self, year: i32) -> Self {
        Self {
            year,
            month: self.month,
        }
    }

    /// Adds or subtracts months, adjusting the year as needed
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.add_months(1).first_day()?.pred_opt()
    }
}

/// Inclusive range of selectable dates
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.min_date, config.max_date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    pub fn first_month(&self) -> YearMonth {
        YearMonth::of(self.min)
    }

    pub fn last_month(&self) -> YearMonth {
        YearMonth::of(self.max)
    }

    /// Years offered by the year dropdown
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min.year()..=self.max.year()
    }

    pub fn clamp_month(&self, month: YearMonth) -> YearMonth {
        month.clamp(self.first_month(), self.last_month())
    }
}

impl Default for DateBounds {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Belongs to an adjacent month, shown dimmed
    pub outside: bool,
    pub disabled: bool,
    pub selected: bool,
}

/// Sunday-first weeks covering one month, padded with outside days
#[derive(Clone, PartialEq, Debug)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weeks: Vec<[DayCell; DAYS_PER_WEEK]>,
}

impl MonthGrid {
    pub fn build(month: YearMonth, bounds: &DateBounds, selected: Option<NaiveDate>) -> Option<Self> {
        let first = month.first_day()?;
        let last = month.last_day()?;

        let lead = first.weekday().num_days_from_sunday() as u64;
        let trail = 6 - last.weekday().num_days_from_sunday() as u64;
        let start = first.checked_sub_days(Days::new(lead))?;
        let end = last.checked_add_days(Days::new(trail))?;

        let mut weeks: Vec<[DayCell; DAYS_PER_WEEK]> = Vec::new();
        let mut week_start = start;
        while week_start <= end {
            let mut cells = Vec::with_capacity(DAYS_PER_WEEK);
            for offset in 0..DAYS_PER_WEEK as u64 {
                let date = week_start.checked_add_days(Days::new(offset))?;
                cells.push(DayCell {
                    date,
                    outside: YearMonth::of(date) != month,
                    disabled: !bounds.contains(date),
                    selected: selected == Some(date),
                });
            }
            weeks.push(cells.try_into().ok()?);
            week_start = week_start.checked_add_days(Days::new(DAYS_PER_WEEK as u64))?;
        }

        Some(Self { month, weeks })
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}
