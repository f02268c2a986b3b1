use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use weekend_calendar_core::boundaries::days_in_month;
use weekend_calendar_core::{CalendarDate, each_weekend_of_month, end_of_month, start_of_month};

/// Saturdays plus Sundays in a month, counted from its length and first weekday.
fn expected_weekend_count(year: i32, month: u32) -> usize {
    let length = days_in_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap().weekday();
    // offset of each day of week from the first of the month
    let mut count = 0;
    for target in [Weekday::Sat, Weekday::Sun] {
        let offset = (7 + target.num_days_from_monday() - first.num_days_from_monday()) % 7;
        if offset < length {
            count += ((length - 1 - offset) / 7 + 1) as usize;
        }
    }
    count
}

fn months(from_year: i32, to_year: i32) -> impl Iterator<Item = (i32, u32)> {
    (from_year..=to_year).flat_map(|y| (1..=12).map(move |m| (y, m)))
}

#[test]
fn every_month_from_1899_to_2101() {
    for (year, month) in months(1899, 2101) {
        let input = NaiveDate::from_ymd_opt(year, month, 1 + (year as u32 + month) % 28).unwrap();
        let result = each_weekend_of_month(&input).unwrap();

        assert!(
            result.iter().all(|d| d.year() == year && d.month() == month),
            "{year}-{month}: element outside the month"
        );
        assert!(result.iter().all(|d| d.is_weekend()), "{year}-{month}: weekday in result");
        assert!(
            result.windows(2).all(|w| w[0] < w[1]),
            "{year}-{month}: not strictly ascending"
        );
        assert_eq!(
            result.len(),
            expected_weekend_count(year, month),
            "{year}-{month}: wrong count"
        );
    }
}

#[test]
fn results_stay_within_month_boundaries() {
    for (year, month) in months(2019, 2026) {
        let input = Utc.with_ymd_and_hms(year, month, 15, 12, 30, 0).unwrap();
        let start = start_of_month(&input).unwrap();
        let end = end_of_month(&input).unwrap();
        let result = each_weekend_of_month(&input).unwrap();

        assert!(result.iter().all(|d| start <= *d && *d <= end));
        assert!(result.iter().all(|d| d.start_of_day().as_ref() == Some(d)));
    }
}

#[test]
fn every_day_of_a_month_gives_the_same_answer() {
    let reference = each_weekend_of_month(&NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()).unwrap();
    for day in 1..=29 {
        let input = NaiveDate::from_ymd_opt(2024, 2, day)
            .unwrap()
            .and_hms_opt(day % 24, 7, 0)
            .unwrap();
        let result: Vec<NaiveDate> = each_weekend_of_month(&input)
            .unwrap()
            .into_iter()
            .map(|d| d.date())
            .collect();
        assert_eq!(result, reference);
    }
}

#[test]
fn months_starting_saturday_with_31_days_have_ten() {
    let found: Vec<(i32, u32)> = months(2000, 2030)
        .filter(|&(y, m)| {
            days_in_month(y, m) == 31
                && NaiveDate::from_ymd_opt(y, m, 1).unwrap().weekday() == Weekday::Sat
        })
        .collect();
    assert!(!found.is_empty());

    for (year, month) in found {
        let result = each_weekend_of_month(&NaiveDate::from_ymd_opt(year, month, 1).unwrap()).unwrap();
        assert_eq!(result.len(), 10, "{year}-{month}");
    }
}

/// Weekend days of a month, minus the days a zone skipped.
fn expected_weekend_days(year: i32, month: u32, skipped: &[NaiveDate]) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .map(|d| NaiveDate::from_ymd_opt(year, month, d).unwrap())
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter(|d| !skipped.contains(d))
        .collect()
}

#[test]
fn zones_with_unusual_transitions() {
    let zones: [(Tz, i32, i32); 4] = [
        (chrono_tz::Pacific::Kwajalein, 1992, 1994),
        (chrono_tz::Pacific::Apia, 2010, 2012),
        (chrono_tz::America::Sao_Paulo, 2017, 2019),
        (chrono_tz::America::Havana, 2010, 2013),
    ];
    // Kwajalein skipped a Saturday; Apia skipped Friday 2011-12-30
    let skipped = [NaiveDate::from_ymd_opt(1993, 8, 21).unwrap()];

    for (tz, from_year, to_year) in zones {
        for (year, month) in months(from_year, to_year) {
            let input = tz.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap();
            let result = each_weekend_of_month(&input).unwrap();
            let days: Vec<NaiveDate> = result.iter().map(|d| d.calendar_day()).collect();

            assert_eq!(
                days,
                expected_weekend_days(year, month, &skipped),
                "{tz} {year}-{month}"
            );
            assert!(
                result.windows(2).all(|w| w[0] < w[1]),
                "{tz} {year}-{month}: not strictly ascending"
            );
            for d in &result {
                let previous_second = d.clone() - chrono::TimeDelta::seconds(1);
                assert!(
                    previous_second.date_naive() < d.date_naive(),
                    "{tz} {d}: not the first instant of its day"
                );
            }
        }
    }
}
