pub mod boundaries;
pub mod calendar_date;
pub mod error;
pub mod interval;
pub mod weekend;

pub use boundaries::{end_of_month, end_of_year, start_of_month, start_of_year};
pub use calendar_date::CalendarDate;
pub use error::WeekendError;
pub use interval::{Interval, each_weekend_of_interval};
pub use weekend::{each_weekend_of_month, each_weekend_of_year};
