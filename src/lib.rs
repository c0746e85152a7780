#![doc(test(attr(deny(warnings))))]

//! Day Span computes whole-calendar-day counts between absolute timestamps,
//! delegating the calendar arithmetic to `chrono`.

pub mod calendar;
pub mod errors;
pub mod instant;

pub use calendar::{days_between, DayCalculator, DayCount, ZoneInterpretation};
pub use errors::DaySpanError;
pub use instant::{Instant, IntoInstant};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("day_span=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Day Span tracing initialized.");
    });
}
