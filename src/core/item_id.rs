use serde::{Deserialize, Serialize};
use std::fmt;

/// Dynamically typed item identifier.
///
/// Derived equality is exact: `Integer(1)` and `Text("1")` are different ids.
/// Use [`ItemId::loose_eq`] when identifiers arrive from loosely typed sources
/// (query strings, CSV cells) and numeric text should match integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Integer(i64),
    Text(String),
}

/// Exact decimal value: `digits * 10^exponent`.
///
/// `digits` carries no leading or trailing zeros, so equal numbers have equal
/// representations regardless of how they were written. Zero is empty digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Numeric {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Numeric {
    fn from_i64(i: i64) -> Self {
        // unsigned_abs keeps i64::MIN representable
        Self::normalized(i < 0, &i.unsigned_abs().to_string(), 0)
    }

    fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        // f64 parsing gates the syntax; it also accepts "inf" and "NaN", which are not numeric ids
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => {}
            _ => return None,
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(pos) => (&unsigned[..pos], unsigned[pos + 1..].parse::<i64>().ok()?),
            None => (unsigned, 0),
        };
        let (integer_part, fraction_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let mut digits = String::with_capacity(integer_part.len() + fraction_part.len());
        digits.push_str(integer_part);
        digits.push_str(fraction_part);
        let exponent = exponent.saturating_sub(fraction_part.len() as i64);

        Some(Self::normalized(negative, &digits, exponent))
    }

    fn normalized(negative: bool, digits: &str, exponent: i64) -> Self {
        let significant = digits.trim_start_matches('0');
        let trimmed = significant.trim_end_matches('0');
        if trimmed.is_empty() {
            return Self {
                negative: false,
                digits: String::new(),
                exponent: 0,
            };
        }
        let dropped = (significant.len() - trimmed.len()) as i64;
        Self {
            negative,
            digits: trimmed.to_string(),
            exponent: exponent.saturating_add(dropped),
        }
    }
}

impl ItemId {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Text(_) => "TEXT",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    /// Returns `true` for integers and for text that reads as a finite number.
    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Self::Integer(i) => Some(Numeric::from_i64(*i)),
            Self::Text(s) => Numeric::parse(s),
        }
    }

    /// Coercive comparison.
    ///
    /// Numbers and numeric text compare by numeric value (`1 == "1" == " 01" == "1.0"`).
    /// Non-numeric text only ever equals identical text.
    pub fn loose_eq(&self, other: &ItemId) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a == b,
                (None, None) => match (self, other) {
                    (Self::Text(a), Self::Text(b)) => a == b,
                    _ => false,
                },
                _ => false,
            },
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for ItemId {
    fn from(i: i32) -> Self {
        Self::Integer(i as i64)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality_respects_variant() {
        assert_eq!(ItemId::from(1), ItemId::Integer(1));
        assert_ne!(ItemId::from(1), ItemId::from("1"));
        assert_ne!(ItemId::from("1"), ItemId::from("01"));
    }

    #[test]
    fn test_loose_eq_integer_and_numeric_text() {
        let one = ItemId::from(1);
        assert!(one.loose_eq(&ItemId::from("1")));
        assert!(one.loose_eq(&ItemId::from(" 1 ")));
        assert!(one.loose_eq(&ItemId::from("1.0")));
        assert!(ItemId::from("01").loose_eq(&one));
        assert!(!one.loose_eq(&ItemId::from("1abc")));
        assert!(!one.loose_eq(&ItemId::from("2")));
    }

    #[test]
    fn test_loose_eq_text_pairs() {
        assert!(ItemId::from("10").loose_eq(&ItemId::from("1e1")));
        assert!(ItemId::from("abc").loose_eq(&ItemId::from("abc")));
        assert!(!ItemId::from("abc").loose_eq(&ItemId::from("ABC")));
        assert!(!ItemId::from("abc").loose_eq(&ItemId::from(0)));
        assert!(!ItemId::from("").loose_eq(&ItemId::from(0)));
    }

    #[test]
    fn test_non_finite_text_is_not_numeric() {
        assert!(!ItemId::from("inf").is_numeric());
        assert!(!ItemId::from("NaN").is_numeric());
        assert!(ItemId::from("-3").is_numeric());
        assert!(!ItemId::from("NaN").loose_eq(&ItemId::from("nan")));
    }

    #[test]
    fn test_loose_eq_is_exact_beyond_float_precision() {
        let below = ItemId::from(9_007_199_254_740_992_i64);
        let above = ItemId::from(9_007_199_254_740_993_i64);
        assert!(above.loose_eq(&ItemId::from("9007199254740993.0")));
        assert!(!below.loose_eq(&ItemId::from("9007199254740993.0")));
        assert!(!below.loose_eq(&ItemId::from("9007199254740992.5")));
        assert!(!ItemId::from("9007199254740993").loose_eq(&ItemId::from("9007199254740992")));
    }

    #[test]
    fn test_loose_eq_outside_i64_range() {
        assert!(!ItemId::from(i64::MAX).loose_eq(&ItemId::from("9223372036854775808")));
        assert!(ItemId::from(i64::MAX).loose_eq(&ItemId::from("9223372036854775807")));
        assert!(ItemId::from(i64::MIN).loose_eq(&ItemId::from("-9223372036854775808.00")));
        assert!(!ItemId::from("9223372036854775808").loose_eq(&ItemId::from("9223372036854775809")));
    }

    #[test]
    fn test_loose_eq_exponent_and_zero_forms() {
        assert!(ItemId::from(1500).loose_eq(&ItemId::from("1.5e3")));
        assert!(ItemId::from(2).loose_eq(&ItemId::from("200E-2")));
        assert!(ItemId::from(0).loose_eq(&ItemId::from("-0.0")));
        assert!(ItemId::from(0).loose_eq(&ItemId::from(".0")));
        assert!(!ItemId::from(1).loose_eq(&ItemId::from("1.5e-1")));
    }

    #[test]
    fn test_display_and_accessors() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("sku-7").to_string(), "sku-7");
        assert_eq!(ItemId::from(42).as_i64(), Some(42));
        assert_eq!(ItemId::from("x").as_str(), Some("x"));
        assert_eq!(ItemId::from("x").type_name(), "TEXT");
    }
}
