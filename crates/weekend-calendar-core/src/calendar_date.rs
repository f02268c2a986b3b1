use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Weekday};

/// A value that sits on a calendar day and can be rebuilt at the start of
/// another day in the same frame of reference (time zone, offset, or none).
///
/// Everything in this crate is generic over this trait and hands back the
/// type it was given, so a `DateTime<Utc>` in means `DateTime<Utc>` out.
/// Implementations must never mutate `self`.
pub trait CalendarDate: Clone + Ord {
    /// The calendar day this value falls on, read in its own frame.
    fn calendar_day(&self) -> NaiveDate;

    /// The first instant of `day` in the same frame as `self`.
    /// Returns `None` if that instant cannot be represented, or if the frame
    /// has no such day (a zone that skipped it).
    fn at_start_of_day(&self, day: NaiveDate) -> Option<Self>;

    /// Start of the day this value falls on.
    fn start_of_day(&self) -> Option<Self> {
        self.at_start_of_day(self.calendar_day())
    }

    /// Start of the day `days` calendar days away (negative goes back).
    fn add_days(&self, days: i64) -> Option<Self> {
        let day = self
            .calendar_day()
            .checked_add_signed(TimeDelta::try_days(days)?)?;
        self.at_start_of_day(day)
    }

    /// Whether this value falls on a Saturday or Sunday.
    fn is_weekend(&self) -> bool {
        is_weekend_day(self.calendar_day())
    }
}

pub(crate) fn is_weekend_day(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

impl CalendarDate for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }

    fn at_start_of_day(&self, day: NaiveDate) -> Option<Self> {
        Some(day)
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }

    fn at_start_of_day(&self, day: NaiveDate) -> Option<Self> {
        Some(day.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }

    fn at_start_of_day(&self, day: NaiveDate) -> Option<Self> {
        let tz = self.timezone();
        let midnight = day.and_time(NaiveTime::MIN);

        // Ambiguous midnight resolves to the earlier instant.
        if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
            return Some(start);
        }

        // Midnight falls in a forward transition. Search UTC for the first
        // instant whose local day is `day`; a zone may skip the day entirely.
        let at = |secs: i64| -> Option<DateTime<Tz>> {
            Some(tz.from_utc_datetime(&DateTime::from_timestamp(secs, 0)?.naive_utc()))
        };
        let previous = midnight.checked_sub_signed(TimeDelta::days(1))?;
        let mut low = tz.from_local_datetime(&previous).earliest()?.timestamp();
        let mut high = low.checked_add(2 * 86_400)?;
        if at(high)?.date_naive() < day {
            return None;
        }
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if at(mid)?.date_naive() < day {
                low = mid;
            } else {
                high = mid;
            }
        }

        let start = at(high)?;
        (start.date_naive() == day).then_some(start)
    }
}
