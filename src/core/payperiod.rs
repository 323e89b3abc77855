//! Pay-period window computation. Pure date arithmetic, no state.

use crate::models::week::WeekClassification;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The two 7-day windows of a 14-day pay period. All bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriodWeeks {
    pub week1_start: NaiveDate,
    pub week1_end: NaiveDate,
    pub week2_start: NaiveDate,
    pub week2_end: NaiveDate,
}

/// Week 1 covers `end-13 ..= end-7`, week 2 covers `end-6 ..= end`:
/// contiguous, non-overlapping, exactly 14 days.
pub fn weeks_for(end: NaiveDate) -> PayPeriodWeeks {
    PayPeriodWeeks {
        week1_start: end - Days::new(13),
        week1_end: end - Days::new(7),
        week2_start: end - Days::new(6),
        week2_end: end,
    }
}

/// Map a date to week 1, week 2, or out-of-range. With no pay period set
/// every date is out of range and callers render it as `?`.
pub fn classify(date: NaiveDate, end: Option<NaiveDate>) -> WeekClassification {
    let Some(end) = end else {
        return WeekClassification::OutOfRange;
    };

    let w = weeks_for(end);

    if date >= w.week1_start && date <= w.week1_end {
        WeekClassification::Week1
    } else if date >= w.week2_start && date <= w.week2_end {
        WeekClassification::Week2
    } else {
        WeekClassification::OutOfRange
    }
}

/// Advisory only: a pay period normally ends on the anchor weekday
/// (Saturday in the reference deployment). Never blocks anything.
pub fn is_standard_anchor(end: NaiveDate, anchor: Weekday) -> bool {
    end.weekday() == anchor
}
