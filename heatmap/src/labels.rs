/// 12-hour clock label for the start of a segment, e.g. "12 AM", "9 AM",
/// "6 PM". Noon and midnight both display as "12".
pub fn hour_label(segment_index: usize, segments_per_day: usize) -> String {
    let hours = segment_index * (24 / segments_per_day);
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = if hours % 12 == 0 { 12 } else { hours % 12 };

    format!("{} {}", display_hours, suffix)
}
