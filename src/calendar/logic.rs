//! # Calendar Logic Module
//!
//! Pure date and week calculations used across the app.
//!
//! ## Responsibilities:
//! - Monday-first month grids (always 6 rows so panel height stays constant)
//! - ISO-8601 week numbering, including year-boundary weeks
//! - Month arithmetic for navigation (previous/next/shift by N months)
//!
//! ## Purpose:
//! Everything here is deterministic and side-effect free, which keeps the
//! layout engine and selection controller trivially testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Monday-first day-of-week abbreviations for panel headers
pub const DAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Month names for panel headers
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Number of week rows in a month grid (fixed so panels never change height)
pub const GRID_ROWS: usize = 6;

/// Number of day columns in a month grid (Monday through Sunday)
pub const GRID_COLS: usize = 7;

/// A 6×7 month grid: day numbers (1-31) or `None` for empty slots
pub type MonthGrid = [[Option<u32>; GRID_COLS]; GRID_ROWS];

/// Return the ISO-8601 (year, week) pair for a date.
///
/// Week 1 is the week containing the year's first Thursday; weeks run
/// Monday-Sunday. Dec 31 can belong to week 1 of the next ISO year and
/// Jan 1-3 to week 52/53 of the previous one.
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// True iff the date falls on a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Return the 1-based day-of-year for the given date
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// First day of the given month
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = next_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next_first = NaiveDate::from_ymd_opt(ny, nm, 1).expect("valid month");
    (next_first - first).num_days() as u32
}

/// Return (year, month) for one month earlier
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Return (year, month) for one month later
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Shift (year, month) by an arbitrary number of months (negative = earlier)
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year as i64 * 12 + (month as i64 - 1) + delta as i64;
    let y = total.div_euclid(12) as i32;
    let m = (total.rem_euclid(12) + 1) as u32;
    (y, m)
}

/// Build the Monday-first 6×7 grid for a month.
///
/// Each cell is a day number or `None` for slots belonging to the previous
/// or next month. Always 6 rows so the calendar height stays constant.
pub fn month_grid(year: i32, month: u32) -> MonthGrid {
    let mut grid: MonthGrid = [[None; GRID_COLS]; GRID_ROWS];
    let Some(first) = first_of_month(year, month) else {
        return grid;
    };

    let offset = first.weekday().num_days_from_monday() as usize;
    let total_days = days_in_month(year, month);

    for day in 1..=total_days {
        let slot = offset + (day as usize - 1);
        grid[slot / GRID_COLS][slot % GRID_COLS] = Some(day);
    }
    grid
}

/// ISO week number for each of the 6 grid rows (`None` for all-blank rows)
pub fn week_numbers(year: i32, month: u32) -> [Option<u32>; GRID_ROWS] {
    let grid = month_grid(year, month);
    let mut weeks = [None; GRID_ROWS];
    for (row_idx, row) in grid.iter().enumerate() {
        if let Some(day) = row.iter().flatten().next() {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, *day) {
                weeks[row_idx] = Some(iso_week(date).1);
            }
        }
    }
    weeks
}

/// Monday of the ISO week containing the given date
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Number of distinct ISO (year, week) pairs touched by an inclusive range
pub fn spanned_iso_weeks(lo: NaiveDate, hi: NaiveDate) -> i64 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    (week_monday(hi) - week_monday(lo)).num_days() / 7 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_iso_week_year_boundaries() {
        // Jan 1 2023 belongs to the last week of ISO year 2022
        assert_eq!(iso_week(d(2023, 1, 1)), (2022, 52));
        // Dec 31 2024 belongs to week 1 of ISO year 2025
        assert_eq!(iso_week(d(2024, 12, 31)), (2025, 1));
        // Jan 4 is always in week 1
        assert_eq!(iso_week(d(2021, 1, 4)), (2021, 1));
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(d(2024, 1, 6))); // Saturday
        assert!(is_weekend(d(2024, 1, 7))); // Sunday
        assert!(!is_weekend(d(2024, 1, 8))); // Monday
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(d(2024, 1, 1)), 1);
        assert_eq!(day_of_year(d(2024, 12, 31)), 366); // leap year
        assert_eq!(day_of_year(d(2023, 12, 31)), 365);
    }

    #[test]
    fn test_month_arithmetic() {
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 6, -7), (2023, 11));
        assert_eq!(shift_month(2024, 6, 12), (2025, 6));
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
    }

    #[test]
    fn test_month_grid_january_2024() {
        // January 2024 starts on a Monday and has 31 days
        let grid = month_grid(2024, 1);
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[0][6], Some(7));
        assert_eq!(grid[4][2], Some(31));
        assert_eq!(grid[4][3], None);
        assert!(grid[5].iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_month_grid_leading_blanks() {
        // June 2024 starts on a Saturday
        let grid = month_grid(2024, 6);
        assert!(grid[0][..5].iter().all(|c| c.is_none()));
        assert_eq!(grid[0][5], Some(1));
        assert_eq!(grid[0][6], Some(2));
        assert_eq!(grid[4][6], Some(30));
        assert!(grid[5].iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_week_numbers_rows() {
        let weeks = week_numbers(2024, 1);
        assert_eq!(weeks[0], Some(1));
        assert_eq!(weeks[4], Some(5));
        assert_eq!(weeks[5], None); // all-blank row
    }

    #[test]
    fn test_spanned_iso_weeks() {
        // 2024-01-01 (Mon) .. 2024-01-07 (Sun) is exactly one ISO week
        assert_eq!(spanned_iso_weeks(d(2024, 1, 1), d(2024, 1, 7)), 1);
        // Crossing into the next week
        assert_eq!(spanned_iso_weeks(d(2024, 1, 1), d(2024, 1, 8)), 2);
        // Single day
        assert_eq!(spanned_iso_weeks(d(2024, 1, 3), d(2024, 1, 3)), 1);
        // Order-independent
        assert_eq!(spanned_iso_weeks(d(2024, 1, 8), d(2024, 1, 1)), 2);
    }
}
