//! Pure reshaping of each provider's raw JSON into canonical records.
//!
//! Nothing here performs I/O. Missing or mistyped upstream fields become
//! `None` (or an empty string for the required `place_id`/`name`/`text`)
//! instead of failing, and every record keeps its source object in `raw`.

pub mod facebook;
pub mod foursquare;
pub mod google;
pub mod yelp;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Walks `path` through nested objects.
fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

/// A string field, with numeric ids rendered as text.
fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    match at(value, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn int_at(value: &Value, path: &[&str]) -> Option<i64> {
    let v = at(value, path)?;
    v.as_i64()
        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
}

fn float_at(value: &Value, path: &[&str]) -> Option<f64> {
    at(value, path)?.as_f64()
}

/// Space-joins an array of address lines; an absent or empty array is `None`.
fn joined_at(value: &Value, path: &[&str]) -> Option<String> {
    let lines: Vec<&str> = at(value, path)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .collect();
    (!lines.is_empty()).then(|| lines.join(" "))
}

/// Unix seconds (integer or fractional) to a UTC timestamp.
fn epoch_at(value: &Value, path: &[&str]) -> Option<DateTime<Utc>> {
    let v = at(value, path)?;
    match v.as_i64() {
        Some(secs) => DateTime::from_timestamp(secs, 0),
        None => {
            let secs = v.as_f64()?;
            #[allow(clippy::cast_possible_truncation)]
            DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
        }
    }
}

/// Elements of a JSON array; anything else yields no elements.
#[must_use]
pub fn items(payload: &Value) -> &[Value] {
    payload.as_array().map(Vec::as_slice).unwrap_or_default()
}
