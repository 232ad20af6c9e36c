use crate::domain::ports::Clock;
use chrono::{NaiveDate, Utc};

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
