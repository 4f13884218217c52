use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Start-of-day bound applied to whole-day allowances.
pub static FULL_DAY_START: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(0, 0, 0).expect("valid time"));

/// End-of-day bound applied to whole-day allowances.
pub static FULL_DAY_END: Lazy<NaiveTime> =
    Lazy::new(|| NaiveTime::from_hms_opt(23, 59, 0).expect("valid time"));

/// One per-diem entry covering a single day or day segment of a trip.
///
/// `amount` is derived from the trip region's rates on save; the provision
/// flags record meals or lodging the employee did not pay for themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allowance {
    pub date: NaiveDate,
    pub whole_day: bool,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
    #[serde(default)]
    pub breakfast_was_provided: bool,
    #[serde(default)]
    pub lunch_was_provided: bool,
    #[serde(default)]
    pub dinner_was_provided: bool,
    #[serde(default)]
    pub accommodation_was_provided: bool,
    #[serde(default)]
    pub amount: f64,
}

impl Allowance {
    /// Creates an allowance covering the whole given day.
    pub fn whole_day(date: NaiveDate) -> Self {
        Self::new(date, true, *FULL_DAY_START, *FULL_DAY_END)
    }

    /// Creates an arrival/departure segment bounded by the given times.
    pub fn segment(date: NaiveDate, from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self::new(date, false, from_time, to_time)
    }

    fn new(date: NaiveDate, whole_day: bool, from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self {
            date,
            whole_day,
            from_time,
            to_time,
            breakfast_was_provided: false,
            lunch_was_provided: false,
            dinner_was_provided: false,
            accommodation_was_provided: false,
            amount: 0.0,
        }
    }
}
