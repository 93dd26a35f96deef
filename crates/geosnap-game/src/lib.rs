pub mod buckets;
pub mod error;
pub mod sampler;
pub mod select;

#[cfg(test)]
mod testutil;

pub use buckets::{day_buckets, require_distinct_days, DayBuckets};
pub use error::SelectionError;
pub use sampler::sample;
pub use select::{select_rounds, SelectionOptions};
