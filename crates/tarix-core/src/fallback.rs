//! Format-list fallback for fully-numeric dates.
//!
//! When the converted input is three or more bare digit groups (a
//! formatted date like `17.06.1992` rather than a spelled-out one), the
//! pipeline hands the compacted string to this parser instead of trusting
//! the word-merging heuristics.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order. The colon-separated entries cover
/// dates rebuilt from `:` punctuation tokens.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // 1992-06-15
    "%d.%m.%Y",  // 15.06.1992
    "%d/%m/%Y",  // 15/06/1992
    "%m/%d/%Y",  // 06/15/1992
    "%Y.%m.%d",  // 1992.06.15
    "%Y/%m/%d",  // 1992/06/15
    "%m.%d.%Y",  // 06.15.1992
    "%m-%d-%Y",  // 06-15-1992
    "%d:%m:%Y",  // 17:06:1992
    "%Y:%m:%d",  // 1992:06:17
    "%m:%d:%Y",  // 06:17:1992
    "%m/%d/%y",  // 06/15/92
    "%d.%m.%y",  // 15.06.92
    "%d/%m/%y",  // 15/06/92
    "%m.%d.%y",  // 06.15.92
    "%m-%d-%y",  // 06-15-92
    "%Y%m%d",    // 19920615
    "%y%m%d",    // 920615
    "%Y%m/%d",   // 199206/15
    "%Y-%m/%d",  // 1992-06/15
    "%Y%m-%d",   // 199206-15
    "%Y.%m/%d",  // 1992.06/15
];

/// Timestamp formats; the time-of-day part is parsed and discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y%m%dT%H%M%SZ",      // 19920615T080000Z
    "%Y-%m-%dT%H:%M:%SZ",  // 1992-06-15T08:00:00Z
    "%Y-%m-%dT%H:%M:%S",   // 1992-06-15T08:00:00
    "%Y-%m-%dT%H:%M",      // 1992-06-15T08:00
];

/// Parse a digit-and-separator string against the format lists; the first
/// successful parse wins. `None` is a normal outcome, not an error.
pub fn parse_numeric_date(text: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(stamp.date());
        }
    }
    None
}

/// ISO `YYYY-MM-DD` rendering of a successful fallback parse.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
