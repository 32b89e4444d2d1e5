/// Alert threshold (percent) applied when the user has not configured one
pub const DEFAULT_GLOBAL_THRESHOLD: f64 = 5.0;

/// Thresholds must be strictly greater than this (percent)
pub const MIN_THRESHOLD_EXCLUSIVE: f64 = 0.0;

/// Largest accepted threshold (percent)
pub const MAX_THRESHOLD: f64 = 100.0;

/// Decimal places kept on computed percent changes
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;
