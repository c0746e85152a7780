use chrono::{FixedOffset, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DaySpanError;
use crate::instant::{Instant, IntoInstant};

/// Signed number of whole calendar days between two instants.
pub type DayCount = i64;

/// How a raw timestamp is mapped to a calendar date before subtraction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ZoneInterpretation {
    /// Observe calendar dates in UTC.
    #[default]
    Utc,
    /// Observe calendar dates in the process-local zone.
    Local,
    /// Observe calendar dates at a fixed offset east of UTC, in seconds.
    FixedOffsetSeconds(i32),
}

impl ZoneInterpretation {
    /// Calendar date observed for `instant` under this interpretation.
    pub fn civil_date(&self, instant: Instant) -> Result<NaiveDate, DaySpanError> {
        let millis = instant.epoch_millis();
        match self {
            ZoneInterpretation::Utc => Utc
                .timestamp_millis_opt(millis)
                .single()
                .map(|utc| utc.date_naive())
                .ok_or(DaySpanError::InstantOutOfRange(millis)),
            ZoneInterpretation::Local => Local
                .timestamp_millis_opt(millis)
                .single()
                .map(|local| local.date_naive())
                .ok_or(DaySpanError::InstantOutOfRange(millis)),
            ZoneInterpretation::FixedOffsetSeconds(seconds) => {
                let offset = FixedOffset::east_opt(*seconds)
                    .ok_or(DaySpanError::InvalidOffset(*seconds))?;
                offset
                    .timestamp_millis_opt(millis)
                    .single()
                    .map(|zoned| zoned.date_naive())
                    .ok_or(DaySpanError::InstantOutOfRange(millis))
            }
        }
    }
}

/// Computes whole-day spans under a configured zone interpretation.
///
/// The default calculator observes calendar dates in UTC.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayCalculator {
    pub zone: ZoneInterpretation,
}

impl DayCalculator {
    pub fn new(zone: ZoneInterpretation) -> Self {
        Self { zone }
    }

    /// Whole calendar days from `start` to `end`.
    ///
    /// The count is the difference between the civil dates the two instants
    /// fall on, so crossing a date boundary counts one day even when fewer
    /// than 24 hours elapsed. Negative when `end` precedes `start`.
    pub fn days_between(
        &self,
        start: impl IntoInstant,
        end: impl IntoInstant,
    ) -> Result<DayCount, DaySpanError> {
        let start_date = self.zone.civil_date(start.into_instant())?;
        let end_date = self.zone.civil_date(end.into_instant())?;
        Ok((end_date - start_date).num_days())
    }
}

/// Whole calendar days from `start` to `end`, observing dates in UTC.
pub fn days_between(
    start: impl IntoInstant,
    end: impl IntoInstant,
) -> Result<DayCount, DaySpanError> {
    DayCalculator::default().days_between(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn civil_date_observes_the_configured_offset() {
        // 2024-06-01T23:00:00Z is already June 2nd two hours east.
        let instant = date(2024, 6, 1).and_hms_opt(23, 0, 0).unwrap().into_instant();

        assert_eq!(
            ZoneInterpretation::Utc.civil_date(instant).unwrap(),
            date(2024, 6, 1)
        );
        assert_eq!(
            ZoneInterpretation::FixedOffsetSeconds(2 * 3600)
                .civil_date(instant)
                .unwrap(),
            date(2024, 6, 2)
        );
    }

    #[test]
    fn civil_date_rejects_out_of_range_timestamps() {
        let err = ZoneInterpretation::Utc
            .civil_date(Instant::from_epoch_millis(i64::MAX))
            .unwrap_err();
        assert_eq!(err, DaySpanError::InstantOutOfRange(i64::MAX));
    }

    #[test]
    fn civil_date_rejects_whole_day_offsets() {
        let err = ZoneInterpretation::FixedOffsetSeconds(86_400)
            .civil_date(Instant::from_epoch_millis(0))
            .unwrap_err();
        assert_eq!(err, DaySpanError::InvalidOffset(86_400));
    }

    #[test]
    fn boundary_crossing_counts_one_day() {
        let late = date(2024, 1, 1).and_hms_opt(23, 30, 0).unwrap();
        let early = date(2024, 1, 2).and_hms_opt(0, 30, 0).unwrap();

        assert_eq!(days_between(late, early).unwrap(), 1);
        assert_eq!(days_between(early, late).unwrap(), -1);
    }

    #[test]
    fn same_civil_date_counts_zero() {
        let morning = date(2024, 1, 1).and_hms_opt(0, 30, 0).unwrap();
        let evening = date(2024, 1, 1).and_hms_opt(23, 30, 0).unwrap();

        assert_eq!(days_between(morning, evening).unwrap(), 0);
    }
}
