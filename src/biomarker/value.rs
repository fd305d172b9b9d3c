use std::fmt;

use serde::{Deserialize, Serialize};

/// A lab value as supplied by a form or JSON record: either a number or
/// free text that should contain one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// A value counts as supplied when it is a number or non-empty text.
    pub fn is_present(&self) -> bool {
        match self {
            RawValue::Number(_) => true,
            RawValue::Text(s) => !s.is_empty(),
        }
    }

    /// Parsed number, or `None` when the text holds no leading number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) => Some(*v).filter(|v| v.is_finite()),
            RawValue::Text(s) => parse_lenient(s),
        }
    }

    /// Parsed number with unparsable input read as zero.
    pub fn to_number(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(v) => write!(f, "{}", v),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&RawValue> for RawValue {
    fn from(value: &RawValue) -> Self {
        value.clone()
    }
}

/// Parses the leading decimal number of `raw`, ignoring leading whitespace
/// and any trailing text (`"120 U/mL"` reads as 120). Non-finite results are
/// rejected.
pub fn parse_lenient(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            end = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Unparsable values read as zero and are still run through the rule table.
pub fn parse_value(raw: &str) -> f64 {
    parse_lenient(raw).unwrap_or(0.0)
}

/// Formats a number the way it is shown in report text: `80` rather than
/// `80.0`, `37.5` as is.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
