use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::{
    errors::HeatmapError,
    structures::{DayOrdering, HeatmapGrid},
};

const HOURS_PER_DAY: usize = 24;
const MINUTES_PER_DAY: usize = 24 * 60;

// Accepted without a UTC offset; offset-carrying inputs go through RFC 3339
// first. The last format matches the r/place CSV export style.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.3f UTC",
];

/// Parse one timestamp into its wall-clock calendar fields. Offset-carrying
/// inputs keep the fields as written, not shifted to UTC.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, HeatmapError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    Err(HeatmapError::InvalidTimestamp(raw.to_string()))
}

/// Bucket timestamps into a fresh 7 x segments_per_day grid.
///
/// Segment counts must divide the day into whole-hour segments (so 3, 4, 6,
/// 8, 12 and 24 are all valid); anything else is rejected rather than
/// rounded. A single malformed timestamp fails the whole pass — dropping
/// entries silently would corrupt the counts without signal.
pub fn bucketize<S: AsRef<str>>(
    timestamps: &[S],
    segments_per_day: usize,
    day_ordering: DayOrdering,
) -> Result<HeatmapGrid, HeatmapError> {
    if segments_per_day == 0 || HOURS_PER_DAY % segments_per_day != 0 {
        return Err(HeatmapError::InvalidSegmentCount(segments_per_day));
    }

    let segment_width_minutes = MINUTES_PER_DAY / segments_per_day;
    let mut grid = HeatmapGrid::new(segments_per_day, day_ordering);

    for raw in timestamps {
        let parsed = parse_timestamp(raw.as_ref())?;

        let total_minutes = parsed.hour() as usize * 60 + parsed.minute() as usize;
        // In [0, segments_per_day) for any valid hour/minute pair.
        let segment_index = total_minutes / segment_width_minutes;
        let day_index = day_ordering.index_of(parsed.weekday());

        grid.bucket_mut(day_index, segment_index).entries.push(parsed);
    }

    grid.recompute_max();

    Ok(grid)
}
