use std::time::Instant;

use tracing::debug;

use crate::Status;

use super::counters::*;

/// Emits one counter event per IGDB request with its latency or the kind of
/// failure. Errors are still returned to the caller.
pub struct IgdbRequestCounter<'a> {
    request: &'a str,
    start: Instant,
}

impl<'a> IgdbRequestCounter<'a> {
    pub fn new(request: &'a str) -> Self {
        Self {
            request,
            start: Instant::now(),
        }
    }

    pub fn log(self) {
        debug!(
            labels.log_type = COUNTERS,
            labels.counter = self.request,
            igdb_request.latency = elapsed_millis(self.start) as u64,
            "IGDB request: {}",
            self.request,
        );
    }

    pub fn log_error(self, status: &Status) {
        debug!(
            labels.log_type = COUNTERS,
            labels.counter = &format!("{}_fail", self.request),
            labels.counter_type = "error",
            labels.status = status.kind(),
            igdb_request.latency = elapsed_millis(self.start) as u64,
            "IGDB request failed: {}",
            self.request,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_consume_without_subscriber() {
        IgdbRequestCounter::new("games/").log();
        IgdbRequestCounter::new("games/").log_error(&Status::no_results("games/1"));
    }
}
