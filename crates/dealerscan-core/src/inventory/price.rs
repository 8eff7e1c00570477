//! Vehicle price as reported by the API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `ModelMSRP` is sometimes a number and sometimes a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Numeric value, when there is one. Strings count only when they are
    /// plain decimals (digits with at most one dot).
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(v) if v.is_finite() => Some(*v),
            Price::Amount(_) => None,
            Price::Text(s) => parse_plain_decimal(s.trim()),
        }
    }
}

fn parse_plain_decimal(s: &str) -> Option<f64> {
    let dots = s.chars().filter(|c| *c == '.').count();
    let valid = dots <= 1
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !valid {
        return None;
    }
    s.parse().ok()
}

/// Whole dollars with thousands separators, e.g. `$45,295`.
fn format_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amount(), self) {
            (Some(v), _) => f.write_str(&format_dollars(v)),
            (None, Price::Text(s)) => f.write_str(s),
            (None, Price::Amount(v)) => write!(f, "{v}"),
        }
    }
}

/// Display helper for an optional price.
pub(crate) fn display_price(price: Option<&Price>) -> String {
    price.map_or_else(|| "N/A".to_string(), |p| p.to_string())
}
