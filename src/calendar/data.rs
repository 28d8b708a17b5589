//! Static academic calendar data for the 2025-26 year.

use chrono::NaiveDate;

/// College reopening date.
pub const REOPEN: &str = "16 June 2025";

/// Odd semester examination window.
pub const ODD_EXAM: &str = "27 Oct – 12 Nov 2025";

/// Even semester examination window.
pub const EVEN_EXAM: &str = "13 – 29 April 2026";

/// First day of the summer vacation.
pub const VACATION: &str = "30 April 2026";

/// Internal test windows.
pub const INTERNAL_TESTS: &[&str] = &[
    "18 – 26 August 2025",
    "1 – 7 October 2025",
    "27 Jan – 4 Feb 2026",
    "11 – 19 March 2026",
];

/// Tuition fee deadline.
pub const TUITION_FEE: &str = "17 July 2025";

/// Odd semester exam fee deadline.
pub const EXAM_FEE: &str = "22 September 2025";

/// Even semester exam fee deadline.
pub const EVEN_EXAM_FEE: &str = "2 February 2026";

pub const EVENTS: &[&str] = &[
    "Orientation Programme: 3, 4 & 7 July 2025",
    "Graduation Day: 24 January 2026",
];

pub const DEPARTMENTS: &[&str] = &[
    "Department of Data Science",
    "Computer Science",
    "Mathematics",
    "Commerce",
    "English",
    "History",
    "Tamil",
    "Biotechnology",
    "Artificial Intelligence (AI)",
    "BBA",
    "BCA",
];

pub const CAMPUS_LOCATION: &str =
    "The American College Satellite Campus is located at Chatrapatti, Madurai.";

/// Holidays as `YYYY-MM-DD`.
pub const HOLIDAYS: &[&str] = &[
    "2025-08-15",
    "2025-10-02",
    "2026-01-14",
    "2026-01-15",
    "2026-01-26",
];

/// Day orders keyed by `YYYY-MM-DD`.
pub const DAY_ORDERS: &[(&str, &str)] = &[
    ("2026-01-08", "Day Order II"),
    ("2026-01-09", "Day Order III"),
    ("2026-01-12", "Day Order IV"),
    ("2026-01-13", "Day Order V"),
];

/// Key format used by `HOLIDAYS` and `DAY_ORDERS`.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Whether a date is a listed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    let key = date.format(DATE_KEY_FORMAT).to_string();
    HOLIDAYS.contains(&key.as_str())
}

/// Day order for a date, if one is scheduled.
pub fn day_order(date: NaiveDate) -> Option<&'static str> {
    let key = date.format(DATE_KEY_FORMAT).to_string();
    DAY_ORDERS
        .iter()
        .find(|(day, _)| *day == key)
        .map(|(_, order)| *order)
}
