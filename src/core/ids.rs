//! Record identifiers and creation timestamps

use chrono::{DateTime, Local, TimeZone};

use super::model::RecordId;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

#[allow(dead_code)]
impl FixedClock {
    /// Frozen at local midnight of the given day
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Monotonic id generator seeded from the clock
///
/// Ids look like millisecond timestamps but never repeat: each one is
/// greater than the previous id handed out and than every id already
/// stored.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, given the current time and the ids already in use
    pub fn next(&mut self, now: DateTime<Local>, existing: impl IntoIterator<Item = RecordId>) -> RecordId {
        let millis = RecordId::try_from(now.timestamp_millis()).unwrap_or(0);
        let floor = existing
            .into_iter()
            .max()
            .map_or(self.last, |max| max.max(self.last));
        let id = millis.max(floor.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_yields_distinct_ids() {
        let clock = FixedClock::on(2026, 3, 5).unwrap();
        let mut ids = IdGenerator::new();
        let a = ids.next(clock.now(), []);
        let b = ids.next(clock.now(), [a]);
        let c = ids.next(clock.now(), []);
        assert_eq!(a, clock.now().timestamp_millis() as RecordId);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_skip_past_stored_records() {
        let clock = FixedClock::on(2026, 3, 5).unwrap();
        let far_future = clock.now().timestamp_millis() as RecordId + 1_000;
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(clock.now(), [far_future, 3]), far_future + 1);
    }

    #[test]
    fn test_largest_stored_id_does_not_overflow() {
        let clock = FixedClock::on(2026, 3, 5).unwrap();
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(clock.now(), [RecordId::MAX]), RecordId::MAX);
        assert_eq!(ids.next(clock.now(), []), RecordId::MAX);
    }

}
