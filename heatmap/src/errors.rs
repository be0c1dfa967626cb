#[derive(Debug, PartialEq, Eq)]
pub enum HeatmapError {
    /// Input entry could not be parsed into calendar fields. Carries the
    /// offending text so the caller can report which entry was bad.
    InvalidTimestamp(String),
    /// Segment count is zero or does not divide 24 hours into whole-hour
    /// segments.
    InvalidSegmentCount(usize),
    /// Hex color string could not be parsed when building a color scale.
    InvalidColor(String),
}
