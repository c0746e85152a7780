use thiserror::Error;

/// Error type that captures instant-to-date conversion failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DaySpanError {
    #[error("timestamp {0}ms is outside the representable calendar range")]
    InstantOutOfRange(i64),
    #[error("invalid fixed offset: {0}s is not within +/-24h")]
    InvalidOffset(i32),
}
