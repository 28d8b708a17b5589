//! Calendar service layer.

use crate::calendar::CalendarBot;
use crate::observability::MetricsTracker;
use chrono::{Local, NaiveDate};

/// Answers calendar questions against the local date.
#[derive(Debug, Clone)]
pub struct CalendarService {
    bot: CalendarBot,
    metrics: MetricsTracker,
}

impl CalendarService {
    pub fn new(metrics: MetricsTracker) -> Self {
        Self {
            bot: CalendarBot::new(),
            metrics,
        }
    }

    /// Reply using today's local date.
    pub fn reply(&self, message: &str) -> String {
        self.reply_on(message, Local::now().date_naive())
    }

    /// Reply as of a given date.
    pub fn reply_on(&self, message: &str, today: NaiveDate) -> String {
        self.metrics.track_calendar_message();
        tracing::debug!(message = %message.trim(), "Calendar message");
        self.bot.respond(message, today)
    }
}
