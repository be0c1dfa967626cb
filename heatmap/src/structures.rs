use chrono::{NaiveDateTime, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

const SUNDAY_FIRST_LABELS: [&str; DAYS_PER_WEEK] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONDAY_FIRST_LABELS: [&str; DAYS_PER_WEEK] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Which weekday occupies row 0 of the grid. Chosen explicitly by the
/// caller; never inferred or defaulted at module level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOrdering {
    SundayFirst,
    MondayFirst,
}

impl DayOrdering {
    pub fn index_of(&self, weekday: Weekday) -> usize {
        match self {
            DayOrdering::SundayFirst => weekday.num_days_from_sunday() as usize,
            DayOrdering::MondayFirst => weekday.num_days_from_monday() as usize,
        }
    }

    pub fn label(&self, day_index: usize) -> &'static str {
        match self {
            DayOrdering::SundayFirst => SUNDAY_FIRST_LABELS[day_index],
            DayOrdering::MondayFirst => MONDAY_FIRST_LABELS[day_index],
        }
    }
}

/// One (day, segment) cell. Entries keep input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub entries: Vec<NaiveDateTime>,
}

impl Bucket {
    pub fn magnitude(&self) -> usize {
        self.entries.len()
    }
}

/// A 7 x segments_per_day grid of buckets, row-major by day. Dimensions are
/// fixed at allocation; one grid per bucketing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    rows: Vec<Vec<Bucket>>,
    pub segments_per_day: usize,
    pub day_ordering: DayOrdering,
    pub max_magnitude: usize,
}

impl HeatmapGrid {
    pub(crate) fn new(segments_per_day: usize, day_ordering: DayOrdering) -> Self {
        let rows = (0..DAYS_PER_WEEK)
            .map(|_| vec![Bucket::default(); segments_per_day])
            .collect();

        HeatmapGrid {
            rows,
            segments_per_day,
            day_ordering,
            max_magnitude: 0,
        }
    }

    pub fn rows(&self) -> &[Vec<Bucket>] {
        &self.rows
    }

    pub fn bucket(&self, day_index: usize, segment_index: usize) -> &Bucket {
        &self.rows[day_index][segment_index]
    }

    pub(crate) fn bucket_mut(&mut self, day_index: usize, segment_index: usize) -> &mut Bucket {
        &mut self.rows[day_index][segment_index]
    }

    pub fn magnitude(&self, day_index: usize, segment_index: usize) -> usize {
        self.rows[day_index][segment_index].magnitude()
    }

    pub(crate) fn recompute_max(&mut self) {
        self.max_magnitude = self
            .rows
            .iter()
            .flatten()
            .map(|bucket| bucket.magnitude())
            .max()
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_follows_ordering() {
        assert_eq!(DayOrdering::SundayFirst.index_of(Weekday::Sun), 0);
        assert_eq!(DayOrdering::SundayFirst.index_of(Weekday::Sat), 6);
        assert_eq!(DayOrdering::MondayFirst.index_of(Weekday::Mon), 0);
        assert_eq!(DayOrdering::MondayFirst.index_of(Weekday::Sun), 6);
    }

    #[test]
    fn labels_match_ordering() {
        assert_eq!(DayOrdering::SundayFirst.label(0), "Sun");
        assert_eq!(DayOrdering::SundayFirst.label(6), "Sat");
        assert_eq!(DayOrdering::MondayFirst.label(0), "Mon");
        assert_eq!(DayOrdering::MondayFirst.label(6), "Sun");
    }

    #[test]
    fn label_and_index_are_bijective() {
        for ordering in [DayOrdering::SundayFirst, DayOrdering::MondayFirst] {
            let weekdays = [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ];

            let mut seen = [false; DAYS_PER_WEEK];
            for weekday in weekdays {
                let index = ordering.index_of(weekday);
                assert!(!seen[index]);
                seen[index] = true;
            }
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = HeatmapGrid::new(8, DayOrdering::SundayFirst);

        assert_eq!(grid.rows().len(), DAYS_PER_WEEK);
        for row in grid.rows() {
            assert_eq!(row.len(), 8);
            for bucket in row {
                assert_eq!(bucket.magnitude(), 0);
            }
        }
        assert_eq!(grid.max_magnitude, 0);
    }
}
