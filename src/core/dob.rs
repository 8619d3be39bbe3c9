use chrono::{Datelike, NaiveDate};

pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// year, 2-digit year, month, day, month+day, day+month, then YMD / MDY / DMY
const DERIVED_PATTERNS: [&str; 9] = [
    "%Y", "%y", "%m", "%d", "%m%d", "%d%m", "%Y%m%d", "%m%d%Y", "%d%m%Y",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DobExpansion {
    pub tokens: Vec<String>,
    pub warning: Option<String>,
}

/// Parse `YYYY-MM-DD` exactly: four, two and two ASCII digits forming a real
/// date in year 1 or later.
pub fn parse_strict(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, DOB_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Numeric re-encodings of a date of birth.
///
/// A malformed date falls back to the raw text with a warning instead of
/// failing; an empty input yields nothing.
pub fn expand_dob(raw: &str) -> DobExpansion {
    if raw.is_empty() {
        return DobExpansion::default();
    }

    match parse_strict(raw) {
        Some(date) => DobExpansion {
            tokens: DERIVED_PATTERNS
                .iter()
                .map(|pattern| date.format(pattern).to_string())
                .collect(),
            warning: None,
        },
        None => {
            tracing::warn!("Invalid DOB '{}', expected YYYY-MM-DD; using raw input", raw);
            DobExpansion {
                tokens: vec![raw.to_string()],
                warning: Some(format!(
                    "⚠️ Invalid DOB '{}' (expected YYYY-MM-DD). Using raw input.",
                    raw
                )),
            }
        }
    }
}
