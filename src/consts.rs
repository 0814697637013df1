use chrono::Weekday;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Every period closes on this day
pub const PERIOD_END_DAY: Weekday = Weekday::Sat;

/// Day skipped when it opens the month
pub const CLOSED_DAY: Weekday = Weekday::Sun;

/// A month whose first worked day falls on or after this weekday
/// runs its first period through the following Saturday
pub const LOOKAHEAD_FROM: Weekday = Weekday::Thu;

/// A trailing period ending on or before this weekday is folded into
/// the one before it
pub const MERGE_UNTIL: Weekday = Weekday::Wed;

/// French month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "", // index 0 unused (months are 1-indexed)
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Period separator (ISO 8601 interval format)
pub const PERIOD_SEPARATOR: char = '/';
/// Month-first format separator (`MM/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Currency suffix used on amounts
pub const CURRENCY_SUFFIX: &str = " €";
/// Suffix used on percentages
pub const PERCENT_SUFFIX: &str = " %";
/// Thousands separator used on amounts
pub const GROUPING_SEPARATOR: char = ' ';
