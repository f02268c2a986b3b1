use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar_date::{CalendarDate, is_weekend_day};

/// Closed interval `[start, end]`. `start <= end` is expected but not enforced;
/// a reversed interval is simply empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<D> {
    pub start: D,
    pub end: D,
}

impl<D: CalendarDate> Interval<D> {
    pub fn new(start: D, end: D) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Whether `date` lies within the interval, both ends included.
    pub fn contains(&self, date: &D) -> bool {
        &self.start <= date && date <= &self.end
    }
}

/// First weekend day on or after `day`.
fn weekend_day_on_or_after(day: NaiveDate) -> Option<NaiveDate> {
    if is_weekend_day(day) {
        return Some(day);
    }
    // Mon..Fri are 0..4 from Monday, Saturday is 5
    let to_saturday = 5 - day.weekday().num_days_from_monday();
    day.checked_add_days(Days::new(u64::from(to_saturday)))
}

/// The weekend day following a weekend day: Saturday -> Sunday -> next Saturday.
fn next_weekend_day(day: NaiveDate) -> Option<NaiveDate> {
    let step = match day.weekday() {
        Weekday::Sat => 1,
        _ => 6,
    };
    day.checked_add_days(Days::new(step))
}

/// Returns every Saturday and Sunday in the closed interval, each at the start
/// of its day in the frame of `interval.start`, in ascending order. Days the
/// frame cannot represent (a day skipped by a zone) are left out.
pub fn each_weekend_of_interval<D: CalendarDate>(interval: &Interval<D>) -> Vec<D> {
    let mut weekends = Vec::new();
    if interval.is_empty() {
        return weekends;
    }

    let last = interval.end.calendar_day();
    let mut current = weekend_day_on_or_after(interval.start.calendar_day());
    while let Some(day) = current.filter(|day| *day <= last) {
        match interval.start.at_start_of_day(day) {
            Some(date) if date.calendar_day() == day => weekends.push(date),
            _ => trace!("{day}: day does not exist in this frame, skipping"),
        }
        current = next_weekend_day(day);
    }

    weekends
}
