// Date utility functions
// Bridges the local clock into civil dates

use chrono::Local;

use crate::models::civil_date::CivilDate;

/// Today's date on the local clock
pub fn today() -> CivilDate {
    CivilDate::from(Local::now().date_naive())
}

/// Serialise a date as the three integers the download workflow passes around.
pub fn to_day_month_year(date: CivilDate) -> (u32, u32, i32) {
    (date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_matches_chrono() {
        let expected = Local::now().date_naive();
        let ours = today();
        // Tolerate the clock crossing midnight between the two calls
        let again = Local::now().date_naive();
        assert!(ours == CivilDate::from(expected) || ours == CivilDate::from(again));
    }

    #[test]
    fn test_to_day_month_year() {
        let date = CivilDate::new(2024, 3, 15).unwrap();
        assert_eq!(to_day_month_year(date), (15, 3, 2024));
    }
}
