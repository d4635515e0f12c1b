//! Date checks
//!
//! Dates are compared as local wall-clock time. "Now" and "today" are read
//! from the system clock each time the check runs.

use chrono::{Datelike, Local, NaiveDateTime, Weekday};

use super::{Message, Rule};
use crate::foundation::{AsValue, Value};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<M, P: AsValue> Rule<M, P> {
    fn push_date_test<F>(&mut self, test: F, message: Message) -> &mut Self
    where
        F: Fn(NaiveDateTime) -> bool + Send + Sync + 'static,
    {
        self.push_value_test(
            move |value| match value {
                Value::Date(date) => test(date),
                _ => true,
            },
            message,
        )
    }

    /// Fails unless the date is before the current instant.
    pub fn is_in_the_past(&mut self) -> &mut Self {
        self.push_date_test(
            |date| date < now(),
            Message::template(|name| format!("{name} must be in the past.")),
        )
    }

    /// Fails unless the date is after the current instant.
    pub fn is_in_the_future(&mut self) -> &mut Self {
        self.push_date_test(
            |date| date > now(),
            Message::template(|name| format!("{name} must be in the future.")),
        )
    }

    /// Fails unless the date is strictly before `limit`.
    pub fn is_before(&mut self, limit: NaiveDateTime) -> &mut Self {
        let shown = limit.format(DATE_FORMAT).to_string();
        self.push_date_test(
            move |date| date < limit,
            Message::template(move |name| format!("{name} must be before {shown}.")),
        )
    }

    /// Fails unless the date is strictly after `limit`.
    pub fn is_after(&mut self, limit: NaiveDateTime) -> &mut Self {
        let shown = limit.format(DATE_FORMAT).to_string();
        self.push_date_test(
            move |date| date > limit,
            Message::template(move |name| format!("{name} must be after {shown}.")),
        )
    }

    /// Fails unless `start <= date <= end`.
    pub fn is_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> &mut Self {
        let shown_start = start.format(DATE_FORMAT).to_string();
        let shown_end = end.format(DATE_FORMAT).to_string();
        self.push_date_test(
            move |date| (start..=end).contains(&date),
            Message::template(move |name| {
                format!("{name} must be between {shown_start} and {shown_end}.")
            }),
        )
    }

    /// Fails unless the date falls on Saturday or Sunday.
    pub fn is_on_weekend(&mut self) -> &mut Self {
        self.push_date_test(
            |date| matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            Message::template(|name| format!("{name} must be on a weekend.")),
        )
    }

    /// Fails unless the date is the current local date.
    pub fn is_today(&mut self) -> &mut Self {
        self.push_date_test(
            |date| date.date() == Local::now().date_naive(),
            Message::template(|name| format!("{name} must be today's date.")),
        )
    }

    /// Fails unless the date falls on `day`.
    pub fn is_on(&mut self, day: Weekday) -> &mut Self {
        let shown = weekday_name(day);
        self.push_date_test(
            move |date| date.weekday() == day,
            Message::template(move |name| format!("{name} must be on a {shown}.")),
        )
    }

    /// Fails unless the date is a Monday.
    pub fn is_monday(&mut self) -> &mut Self {
        self.is_on(Weekday::Mon)
    }

    /// Fails unless the date is a Tuesday.
    pub fn is_tuesday(&mut self) -> &mut Self {
        self.is_on(Weekday::Tue)
    }

    /// Fails unless the date is a Wednesday.
    pub fn is_wednesday(&mut self) -> &mut Self {
        self.is_on(Weekday::Wed)
    }

    /// Fails unless the date is a Thursday.
    pub fn is_thursday(&mut self) -> &mut Self {
        self.is_on(Weekday::Thu)
    }

    /// Fails unless the date is a Friday.
    pub fn is_friday(&mut self) -> &mut Self {
        self.is_on(Weekday::Fri)
    }

    /// Fails unless the date is a Saturday.
    pub fn is_saturday(&mut self) -> &mut Self {
        self.is_on(Weekday::Sat)
    }

    /// Fails unless the date is a Sunday.
    pub fn is_sunday(&mut self) -> &mut Self {
        self.is_on(Weekday::Sun)
    }
}
