use chrono::{DateTime, NaiveDate, Utc};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date used by date-of-birth and age rules.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
