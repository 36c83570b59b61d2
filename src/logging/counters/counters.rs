use std::time::Instant;

/// Value of the `labels.log_type` field on counter events.
pub const COUNTERS: &str = "counters";

pub fn elapsed_millis(start: Instant) -> u128 {
    start.elapsed().as_millis()
}
