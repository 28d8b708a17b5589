//! Keyword-triggered academic calendar replies.
//!
//! The message is lowercased and trimmed, then checked against a fixed,
//! ordered list of triggers. Date-dependent answers take `today` as an
//! argument so callers control the clock.

use super::data::{self, day_order, is_holiday};
use chrono::{Duration, NaiveDate};

const GREETINGS: &[&str] = &["hi", "hello", "hai", "hey"];

pub const GREETING_REPLY: &str = "Hello, how can I help you!";

pub const UNKNOWN_REPLY: &str =
    "Sorry, I didn't understand. Type 'help' to see available options.";

const HELP_REPLY: &str = "📌 You can ask me:\n\
    - academic calendar\n\
    - today date\n\
    - today day order\n\
    - next day order\n\
    - exam date\n\
    - internal test\n\
    - fee payment date\n\
    - departments\n\
    - campus location\n\
    - holidays\n\
    - events";

/// Stateless calendar responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarBot;

impl CalendarBot {
    pub fn new() -> Self {
        Self
    }

    /// Reply to a message as of `today`.
    pub fn respond(&self, message: &str, today: NaiveDate) -> String {
        let msg = message.trim().to_lowercase();

        if GREETINGS.contains(&msg.as_str()) {
            return GREETING_REPLY.to_string();
        }

        if msg.contains("help") {
            return HELP_REPLY.to_string();
        }

        if msg.contains("today date") {
            return today.format("📅 %d %B %Y (%A)").to_string();
        }

        if msg.contains("today day order") {
            return day_order(today)
                .unwrap_or("Day order not available")
                .to_string();
        }

        if msg.contains("next day order") {
            let next = next_working_day(today);
            return format!(
                "{} → {}",
                next.format("%d %B %Y"),
                day_order(next).unwrap_or("Not available")
            );
        }

        if msg.contains("academic calendar") {
            return format!(
                "📅 Academic Calendar:\n\
                 • College Reopens: {}\n\
                 • Odd Semester Exams: {}\n\
                 • Even Semester Exams: {}\n\
                 • Vacation Starts: {}",
                data::REOPEN,
                data::ODD_EXAM,
                data::EVEN_EXAM,
                data::VACATION
            );
        }

        // "internal" is checked before "exam" so "internal exam" lists tests
        if msg.contains("internal") {
            return format!("📝 Internal Tests:\n{}", data::INTERNAL_TESTS.join("\n"));
        }

        if msg.contains("exam") {
            return format!(
                "🧪 Exam Dates:\n• Odd Semester: {}\n• Even Semester: {}",
                data::ODD_EXAM,
                data::EVEN_EXAM
            );
        }

        if msg.contains("fee") || msg.contains("payment") {
            return format!(
                "💳 Fee Payment Dates:\n\
                 • Tuition Fee: {}\n\
                 • Exam Fee: {}\n\
                 • Even Semester Exam Fee: {}",
                data::TUITION_FEE,
                data::EXAM_FEE,
                data::EVEN_EXAM_FEE
            );
        }

        if msg.contains("department") {
            return format!("🏢 Departments:\n{}", data::DEPARTMENTS.join("\n"));
        }

        if msg.contains("location") || msg.contains("where") {
            return format!("📍 {}", data::CAMPUS_LOCATION);
        }

        if msg.contains("holiday") {
            return format!("🎉 Holidays:\n{}", data::HOLIDAYS.join("\n"));
        }

        if msg.contains("event") {
            return format!("🎊 Events:\n{}", data::EVENTS.join("\n"));
        }

        UNKNOWN_REPLY.to_string()
    }
}

/// First day after `today` that is not a listed holiday.
///
/// Weekends are not skipped; only the holiday list is consulted.
pub fn next_working_day(today: NaiveDate) -> NaiveDate {
    let mut next = today + Duration::days(1);
    while is_holiday(next) {
        next += Duration::days(1);
    }
    next
}
