// Day Span - Core Library
// Exposes all modules for use in CLI and tests

pub mod instant;
pub mod range;
pub mod span;

// Re-export commonly used types
pub use instant::{
    DateInput, Instant, InvalidDateError,
    parse_instant,
};
pub use range::{
    dates_between, calendar_date,
};
pub use span::{
    DaySpan, MILLIS_PER_DAY,
    days_between, days_between_instants, span_between,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
