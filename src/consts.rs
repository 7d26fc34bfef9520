/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds and month normalization
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Default lower selection bound.
pub const DEFAULT_MIN_DATE: &str = "1900-01-01";
/// Default upper selection bound.
pub const DEFAULT_MAX_DATE: &str = "2700-12-31";

/// Locale code of the built-in English profile.
pub const DEFAULT_LOCALE_CODE: &str = "en";

/// Pattern for the selected date shown in the picker header.
pub const DEFAULT_HEADER_FORMAT: &str = "ddd, D MMM";
/// Pattern for the displayed month shown above the grid.
pub const DEFAULT_MONTH_YEAR_FORMAT: &str = "MMMM YYYY";

pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const DEFAULT_OK_LABEL: &str = "OK";

/// Number of rows kept above the highlighted year when the year list opens.
pub const YEAR_LIST_LOOKBACK: usize = 3;

/// Month slide/fade transition, in milliseconds.
pub const MONTH_TRANSITION_MS: u64 = 100;
/// Header jump: grid fade-out, in milliseconds.
pub const JUMP_FADE_OUT_MS: u64 = 50;
/// Header jump: delay before the grid reloads, in milliseconds.
pub const JUMP_DELAY_MS: u64 = 30;
/// Header jump: grid fade-in, in milliseconds.
pub const JUMP_FADE_IN_MS: u64 = 150;
