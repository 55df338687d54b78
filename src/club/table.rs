//! Club tables and billing
//!
//! A table is billed per started hour each time it is freed. Usage time is
//! accumulated exactly, without rounding.

use chrono::{Duration, NaiveTime};

use crate::types::{elapsed_between, format_duration, TableId, TableState};

/// A table on the club floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table number
    pub id: TableId,
    state: TableState,
    profit: u64,
    usage_time: Duration,
}

impl Table {
    /// Create a free table with no profit and no usage
    pub fn new(id: TableId) -> Self {
        Self { id, state: TableState::Free, profit: 0, usage_time: Duration::zero() }
    }

    /// Mark the table busy from `start_time`
    ///
    /// The caller is responsible for checking that the table is free.
    pub fn take(&mut self, start_time: NaiveTime) {
        self.state = TableState::Busy { since: start_time };
    }

    /// Free the table at `end_time`, billing the stay
    ///
    /// Returns the length of the stay, or `None` if the table was already free
    /// (nothing is billed in that case).
    pub fn free(&mut self, end_time: NaiveTime, price_per_hour: u64) -> Option<Duration> {
        let TableState::Busy { since } = self.state else {
            return None;
        };

        let elapsed = elapsed_between(since, end_time);
        // Any u64 price is accepted, so revenue caps at u64::MAX
        let charge = billed_hours(elapsed).saturating_mul(price_per_hour);
        self.profit = self.profit.saturating_add(charge);
        self.usage_time = self.usage_time + elapsed;
        self.state = TableState::Free;

        Some(elapsed)
    }

    /// Current occupancy
    pub fn state(&self) -> TableState {
        self.state
    }

    /// Check if somebody sits at the table
    pub fn is_busy(&self) -> bool {
        matches!(self.state, TableState::Busy { .. })
    }

    /// Check if the table can be taken
    pub fn is_free(&self) -> bool {
        !self.is_busy()
    }

    /// Money earned by this table so far
    pub fn profit(&self) -> u64 {
        self.profit
    }

    /// Total time the table has been busy so far
    pub fn usage_time(&self) -> Duration {
        self.usage_time
    }

    /// Usage time formatted as `HH:MM`
    pub fn usage_time_display(&self) -> String {
        format_duration(self.usage_time)
    }
}

/// Number of hours to charge for a stay: every started hour counts
pub fn billed_hours(elapsed: Duration) -> u64 {
    let minutes = elapsed.num_minutes().max(0) as u64;
    minutes.div_ceil(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_table_creation() {
        let table = Table::new(TableId::new(1));
        assert!(table.is_free());
        assert_eq!(table.profit(), 0);
        assert_eq!(table.usage_time(), Duration::zero());
        assert_eq!(table.usage_time_display(), "00:00");
    }

    #[test]
    fn test_billed_hours_round_up() {
        assert_eq!(billed_hours(Duration::zero()), 0);
        assert_eq!(billed_hours(Duration::minutes(1)), 1);
        assert_eq!(billed_hours(Duration::minutes(60)), 1);
        assert_eq!(billed_hours(Duration::minutes(61)), 2);
        assert_eq!(billed_hours(Duration::minutes(595)), 10);
    }

    #[test]
    fn test_take_and_free_bills_started_hours() {
        let mut table = Table::new(TableId::new(1));
        table.take(clock(9, 5));
        assert!(table.is_busy());
        assert_eq!(table.state(), TableState::Busy { since: clock(9, 5) });

        let elapsed = table.free(clock(19, 0), 10);
        assert_eq!(elapsed, Some(Duration::minutes(595)));
        assert!(table.is_free());
        assert_eq!(table.profit(), 100);
        assert_eq!(table.usage_time_display(), "09:55");
    }

    #[test]
    fn test_huge_price_saturates_profit() {
        let mut table = Table::new(TableId::new(1));
        table.take(clock(9, 0));
        table.free(clock(11, 0), u64::MAX);
        assert_eq!(table.profit(), u64::MAX);

        table.take(clock(12, 0));
        table.free(clock(12, 30), u64::MAX);
        assert_eq!(table.profit(), u64::MAX);
        assert_eq!(table.usage_time_display(), "02:30");
    }

    #[test]
    fn test_zero_length_stay_bills_nothing() {
        let mut table = Table::new(TableId::new(1));
        table.take(clock(12, 0));
        table.free(clock(12, 0), 10);
        assert_eq!(table.profit(), 0);
        assert_eq!(table.usage_time(), Duration::zero());
    }

    #[test]
    fn test_stay_across_midnight() {
        let mut table = Table::new(TableId::new(2));
        table.take(clock(23, 50));
        let elapsed = table.free(clock(0, 10), 7);
        assert_eq!(elapsed, Some(Duration::minutes(20)));
        assert_eq!(table.profit(), 7);
        assert_eq!(table.usage_time_display(), "00:20");
    }

    #[test]
    fn test_profit_and_usage_accumulate() {
        let mut table = Table::new(TableId::new(1));
        table.take(clock(9, 54));
        table.free(clock(12, 33), 10);
        table.take(clock(12, 33));
        table.free(clock(15, 52), 10);

        assert_eq!(table.profit(), 70);
        assert_eq!(table.usage_time_display(), "05:58");
    }

    #[test]
    fn test_freeing_a_free_table_is_noop() {
        let mut table = Table::new(TableId::new(1));
        assert_eq!(table.free(clock(10, 0), 10), None);
        assert_eq!(table.profit(), 0);
    }
}
