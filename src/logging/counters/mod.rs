mod counters;
mod igdb_counters;

pub use counters::COUNTERS;
pub use igdb_counters::*;
