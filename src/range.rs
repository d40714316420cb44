use serde::{Deserialize, Serialize};

use crate::CalDate;

/// An optional inclusive date bound: `min`, `max`, or both may be absent,
/// meaning unbounded on that side.
///
/// No ordering between `min` and `max` is enforced; an inverted range
/// simply contains no dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    min: Option<CalDate>,
    max: Option<CalDate>,
}

impl DateRange {
    /// A range with no bounds on either side
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates a range from optional inclusive endpoints
    pub const fn new(min: Option<CalDate>, max: Option<CalDate>) -> Self {
        Self { min, max }
    }

    /// Creates a range bounded on both sides
    pub const fn between(min: CalDate, max: CalDate) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns the lower bound, if any
    pub const fn min(&self) -> Option<CalDate> {
        self.min
    }

    /// Returns the upper bound, if any
    pub const fn max(&self) -> Option<CalDate> {
        self.max
    }

    /// True iff the date satisfies both present bounds, inclusive.
    /// Comparison is by calendar ordering: year, then month, then day.
    pub fn contains(&self, date: CalDate) -> bool {
        let above_min = self.min.is_none_or(|min| min <= date);
        let below_max = self.max.is_none_or(|max| date <= max);
        above_min && below_max
    }
}
