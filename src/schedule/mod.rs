use chrono::{Datelike, Timelike, Weekday};

/// The synchronization must start before the 10:00 opening of the agencies.
pub fn before_cutoff(now: &impl Timelike) -> bool {
    now.hour() < 10
}

/// Weekends are skipped. Holidays are not taken into account.
pub fn is_business_day(now: &impl Datelike) -> bool {
    !matches!(now.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn weekday_mornings_are_inside_the_window() {
        let monday = at(2025, 3, 3, 9, 59);

        assert!(before_cutoff(&monday));
        assert!(is_business_day(&monday));
    }

    #[test]
    fn ten_oclock_is_already_too_late() {
        assert!(!before_cutoff(&at(2025, 3, 3, 10, 0)));
        assert!(!before_cutoff(&at(2025, 3, 3, 15, 30)));
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert!(!is_business_day(&at(2025, 3, 1, 9, 0)));
        assert!(!is_business_day(&at(2025, 3, 2, 9, 0)));
    }
}
