use tracing::debug;

use crate::boundaries::{end_of_month, end_of_year, start_of_month, start_of_year};
use crate::calendar_date::CalendarDate;
use crate::error::WeekendError;
use crate::interval::{Interval, each_weekend_of_interval};

/// Lists every Saturday and Sunday in the month containing `date`, each at the
/// start of its day, in ascending order.
///
/// Fails with [`WeekendError::InvalidDate`] when the month's boundaries cannot
/// be represented for `date`'s type and frame.
///
/// ```
/// use chrono::NaiveDate;
/// use weekend_calendar_core::each_weekend_of_month;
///
/// let weekends = each_weekend_of_month(&NaiveDate::from_ymd_opt(2022, 2, 1).unwrap()).unwrap();
/// assert_eq!(weekends.len(), 8);
/// assert_eq!(weekends[0], NaiveDate::from_ymd_opt(2022, 2, 5).unwrap());
/// ```
pub fn each_weekend_of_month<D: CalendarDate>(date: &D) -> Result<Vec<D>, WeekendError> {
    let Some(start) = start_of_month(date) else {
        debug!("start of month not representable");
        return Err(WeekendError::InvalidDate);
    };
    let Some(end) = end_of_month(date) else {
        debug!("end of month not representable");
        return Err(WeekendError::InvalidDate);
    };

    Ok(each_weekend_of_interval(&Interval::new(start, end)))
}

/// Lists every Saturday and Sunday in the year containing `date`.
pub fn each_weekend_of_year<D: CalendarDate>(date: &D) -> Result<Vec<D>, WeekendError> {
    let Some(start) = start_of_year(date) else {
        debug!("start of year not representable");
        return Err(WeekendError::InvalidDate);
    };
    let Some(end) = end_of_year(date) else {
        debug!("end of year not representable");
        return Err(WeekendError::InvalidDate);
    };

    Ok(each_weekend_of_interval(&Interval::new(start, end)))
}
