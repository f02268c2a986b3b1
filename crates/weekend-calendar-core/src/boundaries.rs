use chrono::Datelike;

use crate::calendar_date::CalendarDate;

#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`; 0 for an out-of-range month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Start of the first day of `date`'s month.
pub fn start_of_month<D: CalendarDate>(date: &D) -> Option<D> {
    let first = date.calendar_day().with_day(1)?;
    date.at_start_of_day(first)
}

/// Start of the last day of `date`'s month.
pub fn end_of_month<D: CalendarDate>(date: &D) -> Option<D> {
    let day = date.calendar_day();
    let last = day.with_day(days_in_month(day.year(), day.month()))?;
    date.at_start_of_day(last)
}

/// Start of January 1st of `date`'s year.
pub fn start_of_year<D: CalendarDate>(date: &D) -> Option<D> {
    let first = date.calendar_day().with_ordinal(1)?;
    date.at_start_of_day(first)
}

/// Start of December 31st of `date`'s year.
pub fn end_of_year<D: CalendarDate>(date: &D) -> Option<D> {
    let last = date.calendar_day().with_month(12)?.with_day(31)?;
    date.at_start_of_day(last)
}
