pub mod aggregate;
pub mod normalize;

pub use aggregate::{collect_scores, mean, median, stddev};
pub use normalize::{normalize, normalize_value, RawScore};
