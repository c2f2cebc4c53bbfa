use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Response body of `GET /api/data/{location}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryPoint>,
}

/// One observed deforestation rate. The service forwards raw CSV rows, so
/// extra columns (district, rainfall, ...) are ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(rename = "Year", deserialize_with = "deserialize_year")]
    pub year: i32,
    #[serde(rename = "Deforestation_Rate_%")]
    pub deforestation_rate: RateValue,
}

/// A rate as sent by the service: a JSON number, a numeric string, or a
/// blank CSV cell (`null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
    /// `null` or any other non-numeric JSON value.
    Missing,
}

impl RateValue {
    /// Coerces the rate to a float.
    ///
    /// Strings are read like a lenient float parse: leading whitespace is
    /// skipped and the longest numeric prefix wins (`"1.5%"` is `1.5`).
    /// Anything without a numeric prefix yields `NaN`.
    pub fn as_f64(&self) -> f64 {
        match self {
            RateValue::Number(value) => *value,
            RateValue::Text(raw) => parse_float_prefix(raw),
            RateValue::Missing => f64::NAN,
        }
    }
}

impl<'de> Deserialize<'de> for RateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RateValueVisitor)
    }
}

struct RateValueVisitor;

impl<'de> Visitor<'de> for RateValueVisitor {
    type Value = RateValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a string or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RateValue, E> {
        Ok(RateValue::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RateValue, E> {
        Ok(RateValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RateValue, E> {
        Ok(RateValue::Number(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RateValue, E> {
        Ok(RateValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RateValue, E> {
        Ok(RateValue::Text(value))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<RateValue, E> {
        Ok(RateValue::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RateValue, E> {
        Ok(RateValue::Missing)
    }

    fn visit_none<E: de::Error>(self) -> Result<RateValue, E> {
        Ok(RateValue::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RateValue, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RateValue, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RateValue::Missing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RateValue, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RateValue::Missing)
    }
}

/// Accepts integer years and whole-number floats (`2019.0`), which is how
/// pandas emits an integer column that contained a blank cell.
fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a whole-number year")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i32, E> {
            i32::try_from(value).map_err(|_| E::custom(format!("year {value} out of range")))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i32, E> {
            i32::try_from(value).map_err(|_| E::custom(format!("year {value} out of range")))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i32, E> {
            let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
            if value.fract() == 0.0 && in_range {
                Ok(value as i32)
            } else {
                Err(E::custom(format!("year {value} is not a whole number")))
            }
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

impl From<f64> for RateValue {
    fn from(value: f64) -> Self {
        RateValue::Number(value)
    }
}

impl From<&str> for RateValue {
    fn from(value: &str) -> Self {
        RateValue::Text(value.to_string())
    }
}

fn parse_float_prefix(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}
