use crate::consts::{GRID_CELLS, MIN_DAY};
use crate::prelude::*;
use crate::range::DateRange;
use crate::types::{days_in_month, normalize_month, weekday, MonthIndex};
use crate::CalDate;
use serde::{Deserialize, Serialize};

/// Which month a grid cell belongs to, relative to the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CellOrigin {
    /// Trailing days of the month before the displayed one
    #[display(fmt = "previous")]
    Previous,
    /// Days of the displayed month
    #[display(fmt = "current")]
    Current,
    /// Leading days of the month after the displayed one
    #[display(fmt = "next")]
    Next,
}

/// One cell of a rendered month grid: a concrete date plus the month it
/// belongs to relative to the page. Cells are generated fresh per grid
/// request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateCell {
    pub date: CalDate,
    pub origin: CellOrigin,
}

impl DateCell {
    /// True iff this cell is the given reference date. Capture the
    /// reference once per render (`CalDate::today()`) so every cell of one
    /// grid agrees on which cell, if any, is today.
    #[inline]
    pub fn is_today(&self, today: CalDate) -> bool {
        self.date == today
    }

    /// True iff this cell is the selected date. The cell's origin plays
    /// no part in the comparison.
    #[inline]
    pub fn is_selected(&self, selected: CalDate) -> bool {
        self.date == selected
    }

    /// True iff this cell's date satisfies the range bounds
    #[inline]
    pub fn in_range(&self, range: &DateRange) -> bool {
        range.contains(self.date)
    }
}

/// The displayed (year, month) pair of a calendar popup, with grid
/// generation and month/year navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{month} {year}")]
pub struct MonthPage {
    year: i32,
    month: MonthIndex,
}

impl MonthPage {
    /// Creates a page for the given year and month
    pub const fn new(year: i32, month: MonthIndex) -> Self {
        Self { year, month }
    }

    /// The page on which the given date appears as a current-month cell
    pub const fn containing(date: CalDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the displayed year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the displayed month
    #[inline]
    pub const fn month(&self) -> MonthIndex {
        self.month
    }

    /// Generates the 42 cells of this page: trailing days of the previous
    /// month (as many as the Monday-start weekday index of day 1), every
    /// day of the displayed month, then leading days of the next month up
    /// to the fixed grid size. Each block ascends by day.
    pub fn cells(&self) -> Vec<DateCell> {
        let mut cells = Vec::with_capacity(GRID_CELLS);

        let current_days = days_in_month(self.year, i32::from(self.month.get()));
        let leading = weekday(self.year, self.month, MIN_DAY).days_from_monday();

        let (prev_year, prev_month) = normalize_month(self.year, i32::from(self.month.get()) - 1);
        let prev_days = days_in_month(prev_year, i32::from(prev_month.get()));
        for day in (prev_days - leading + 1)..=prev_days {
            cells.push(DateCell {
                date: CalDate::from_valid_parts(prev_year, prev_month, day),
                origin: CellOrigin::Previous,
            });
        }

        for day in MIN_DAY..=current_days {
            cells.push(DateCell {
                date: CalDate::from_valid_parts(self.year, self.month, day),
                origin: CellOrigin::Current,
            });
        }

        // The grid always holds six full weeks
        let trailing = GRID_CELLS as u8 - current_days - leading;
        let (next_year, next_month) = normalize_month(self.year, i32::from(self.month.get()) + 1);
        for day in MIN_DAY..=trailing {
            cells.push(DateCell {
                date: CalDate::from_valid_parts(next_year, next_month, day),
                origin: CellOrigin::Next,
            });
        }

        debug_assert_eq!(cells.len(), GRID_CELLS);
        cells
    }

    /// The page one month later, wrapping December into January of the
    /// next year
    pub const fn next_month(self) -> Self {
        let (year, month) = normalize_month(self.year, self.month.get() as i32 + 1);
        Self { year, month }
    }

    /// The page one month earlier, wrapping January into December of the
    /// previous year
    pub const fn prev_month(self) -> Self {
        let (year, month) = normalize_month(self.year, self.month.get() as i32 - 1);
        Self { year, month }
    }

    /// The same month one year later
    pub const fn next_year(self) -> Self {
        Self {
            year: self.year + 1,
            month: self.month,
        }
    }

    /// The same month one year earlier
    pub const fn prev_year(self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRID_COLUMNS, GRID_ROWS};

    fn month(index: u8) -> MonthIndex {
        MonthIndex::new(index).unwrap()
    }

    fn date(year: i32, month_index: u8, day: u8) -> CalDate {
        CalDate::from_ymd(year, month_index, day).unwrap()
    }

    fn origin_blocks(cells: &[DateCell]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let days = |origin: CellOrigin| {
            cells
                .iter()
                .filter(|c| c.origin == origin)
                .map(|c| c.date.day().get())
                .collect::<Vec<_>>()
        };
        (
            days(CellOrigin::Previous),
            days(CellOrigin::Current),
            days(CellOrigin::Next),
        )
    }

    #[test]
    fn test_grid_is_always_42_cells() {
        let years = [-1, 0, 1900, 2000, 2023, 2024, 9999];
        for year in years {
            for index in 0..12 {
                let cells = MonthPage::new(year, month(index)).cells();
                assert_eq!(
                    cells.len(),
                    GRID_CELLS,
                    "grid for year {year} month index {index}"
                );
                assert_eq!(cells.len(), GRID_ROWS * GRID_COLUMNS);
            }
        }
    }

    #[test]
    fn test_blocks_partition_in_order() {
        for year in [2023, 2024] {
            for index in 0..12 {
                let cells = MonthPage::new(year, month(index)).cells();

                // previous block first, then current, then next
                let mut seen_current = false;
                let mut seen_next = false;
                for cell in &cells {
                    match cell.origin {
                        CellOrigin::Previous => {
                            assert!(!seen_current && !seen_next);
                        }
                        CellOrigin::Current => {
                            assert!(!seen_next);
                            seen_current = true;
                        }
                        CellOrigin::Next => seen_next = true,
                    }
                }

                // each block strictly ascending by day
                let (previous, current, next) = origin_blocks(&cells);
                for block in [&previous, &current, &next] {
                    assert!(block.windows(2).all(|w| w[0] < w[1]));
                }
                assert_eq!(current.first(), Some(&1));
                assert_eq!(
                    current.len(),
                    days_in_month(year, i32::from(index)) as usize
                );
            }
        }
    }

    #[test]
    fn test_january_2023_starts_with_six_fillers() {
        // 1 January 2023 is a Sunday, Monday-start index 6
        let cells = MonthPage::new(2023, month(0)).cells();
        let (previous, current, next) = origin_blocks(&cells);

        assert_eq!(previous, vec![26, 27, 28, 29, 30, 31]);
        assert_eq!(current.len(), 31);
        assert_eq!(next, vec![1, 2, 3, 4, 5]);

        // the fillers are December 2022
        assert_eq!(cells[0].date, date(2022, 11, 26));
        assert_eq!(cells[5].date, date(2022, 11, 31));
        // and the trailing cells are February 2023
        assert_eq!(cells[41].date, date(2023, 1, 5));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_fillers() {
        // 1 May 2023 is a Monday
        let cells = MonthPage::new(2023, month(4)).cells();
        let (previous, current, next) = origin_blocks(&cells);

        assert!(previous.is_empty());
        assert_eq!(cells[0].date, date(2023, 4, 1));
        assert_eq!(current.len(), 31);
        assert_eq!(next.len(), 11);
    }

    #[test]
    fn test_leap_february_grid() {
        // 1 February 2024 is a Thursday, Monday-start index 3
        let cells = MonthPage::new(2024, month(1)).cells();
        let (previous, current, next) = origin_blocks(&cells);

        assert_eq!(previous, vec![29, 30, 31]);
        assert_eq!(current.len(), 29);
        assert_eq!(next.len(), 10);
    }

    #[test]
    fn test_december_spills_into_next_year() {
        let cells = MonthPage::new(2024, month(11)).cells();
        let trailing: Vec<_> = cells
            .iter()
            .filter(|c| c.origin == CellOrigin::Next)
            .collect();

        assert!(!trailing.is_empty());
        assert_eq!(trailing[0].date, date(2025, 0, 1));
    }

    #[test]
    fn test_previous_block_ends_on_last_day_of_previous_month() {
        for year in [2020, 2023, 2024] {
            for index in 0..12 {
                let cells = MonthPage::new(year, month(index)).cells();
                let last_previous = cells
                    .iter()
                    .take_while(|c| c.origin == CellOrigin::Previous)
                    .last();

                if let Some(cell) = last_previous {
                    assert_eq!(
                        cell.date.day().get(),
                        days_in_month(year, i32::from(index) - 1),
                        "year {year} month index {index}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_is_today_ignores_origin() {
        let today = date(2023, 1, 1);
        // 1 February 2023 appears as a next-origin filler on the January page
        let cells = MonthPage::new(2023, month(0)).cells();
        let filler = cells
            .iter()
            .find(|c| c.origin == CellOrigin::Next && c.date == today)
            .unwrap();

        assert!(filler.is_today(today));
        assert!(!filler.is_today(date(2023, 1, 2)));
    }

    #[test]
    fn test_is_selected() {
        let cells = MonthPage::new(2023, month(7)).cells();
        let selected = date(2023, 7, 15);

        let matching: Vec<_> = cells.iter().filter(|c| c.is_selected(selected)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].date, selected);
    }

    #[test]
    fn test_in_range_classifier() {
        let range = DateRange::new(Some(date(2023, 5, 8)), Some(date(2023, 9, 4)));
        let cells = MonthPage::new(2023, month(7)).cells();

        assert!(cells.iter().all(|c| c.in_range(&range)));

        let narrow = DateRange::new(Some(date(2023, 7, 10)), Some(date(2023, 7, 20)));
        let inside = cells.iter().filter(|c| c.in_range(&narrow)).count();
        assert_eq!(inside, 11);
    }

    #[test]
    fn test_navigation_wraps_at_year_boundaries() {
        let december = MonthPage::new(2024, month(11));
        assert_eq!(december.next_month(), MonthPage::new(2025, month(0)));

        let january = MonthPage::new(2023, month(0));
        assert_eq!(january.prev_month(), MonthPage::new(2022, month(11)));

        let august = MonthPage::new(2023, month(7));
        assert_eq!(august.next_month(), MonthPage::new(2023, month(8)));
        assert_eq!(august.prev_month(), MonthPage::new(2023, month(6)));
        assert_eq!(august.next_year(), MonthPage::new(2024, month(7)));
        assert_eq!(august.prev_year(), MonthPage::new(2022, month(7)));
    }

    #[test]
    fn test_containing() {
        let page = MonthPage::containing(date(2023, 7, 15));
        assert_eq!(page, MonthPage::new(2023, month(7)));
        assert!(page
            .cells()
            .iter()
            .any(|c| c.origin == CellOrigin::Current && c.date == date(2023, 7, 15)));
    }

    #[test]
    fn test_page_display() {
        assert_eq!(MonthPage::new(2023, month(7)).to_string(), "Aug 2023");
        assert_eq!(MonthPage::new(2024, month(0)).to_string(), "Jan 2024");
    }

    #[test]
    fn test_cell_origin_display() {
        assert_eq!(CellOrigin::Previous.to_string(), "previous");
        assert_eq!(CellOrigin::Current.to_string(), "current");
        assert_eq!(CellOrigin::Next.to_string(), "next");
    }

    #[test]
    fn test_cell_serde() {
        let cell = DateCell {
            date: date(2023, 7, 15),
            origin: CellOrigin::Previous,
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"date":"15-08-2023","origin":"previous"}"#);

        let parsed: DateCell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, parsed);
    }
}
