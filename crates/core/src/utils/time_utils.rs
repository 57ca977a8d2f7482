use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// First instant (00:00:00 UTC) of the calendar month containing `reference`.
pub fn start_of_month(reference: DateTime<Utc>) -> DateTime<Utc> {
    let date = reference.date_naive();
    let first_day = date.with_day(1).unwrap_or(date);
    first_day.and_time(NaiveTime::MIN).and_utc()
}

/// Inclusive range check on both bounds.
pub fn is_within(instant: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    instant >= start && instant <= end
}
