/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Zero-based index of January
pub const JANUARY_INDEX: u8 = 0;
/// Zero-based index of February
pub const FEBRUARY_INDEX: u8 = 1;
/// Zero-based index of December
pub const DECEMBER_INDEX: u8 = 11;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Largest day count any month can have
pub const MAX_DAYS_IN_MONTH: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month, indexed by zero-based month
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Abbreviated month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated weekday names, indexed by days from Monday
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Remap from native weekday numbering (0 = Sunday .. 6 = Saturday) to
/// Monday-start indices (0 = Monday .. 6 = Sunday)
pub const SUNDAY_START_TO_MONDAY_START: [u8; 7] = [6, 0, 1, 2, 3, 4, 5];

/// Grid columns (one per weekday)
pub const GRID_COLUMNS: usize = 7;
/// Grid rows (full weeks shown per month page)
pub const GRID_ROWS: usize = 6;
/// Total cells in one month page
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator in the canonical `DD-MM-YYYY` form
pub const DATE_SEPARATOR: char = '-';

/// Digits in the canonical day field
pub(crate) const DAY_DIGITS: usize = 2;
/// Digits in the canonical month field
pub(crate) const MONTH_DIGITS: usize = 2;
/// Minimum digits in the canonical year field
pub(crate) const YEAR_MIN_DIGITS: usize = 4;
