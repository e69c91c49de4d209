//! Tolerant field decoders for model-generated JSON.
//!
//! The format hints in the prompts ask for integers and strings, but model
//! output drifts: counts come back as `12.0` or `"12"`, years as `2023`.
//! These decoders accept those variants instead of failing the whole list.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value as JsonValue;

/// Integer from a JSON integer, a float (truncated) or a numeric string
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    match &value {
        JsonValue::Null => Ok(0),
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| D::Error::custom(format!("integer out of range: {n}"))),
        JsonValue::String(s) => parse_number(s)
            .map(|f| f.trunc() as i64)
            .ok_or_else(|| D::Error::custom(format!("expected an integer, found \"{s}\""))),
        other => Err(D::Error::custom(format!("expected an integer, found {other}"))),
    }
}

/// Floating point number from a JSON number or a numeric string
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    match &value {
        JsonValue::Null => Ok(0.0),
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("number out of range: {n}"))),
        JsonValue::String(s) => parse_number(s)
            .ok_or_else(|| D::Error::custom(format!("expected a number, found \"{s}\""))),
        other => Err(D::Error::custom(format!("expected a number, found {other}"))),
    }
}

/// String from a JSON string, number or boolean; `null` becomes empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

/// Like [`text`], but keeps `null` as `None`
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) => Ok(Some(s)),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        JsonValue::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a string, found {other}"))),
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::integer")]
        count: i64,
        #[serde(default, deserialize_with = "super::number")]
        share: f64,
        #[serde(default, deserialize_with = "super::text")]
        label: String,
        #[serde(default, deserialize_with = "super::optional_text")]
        note: Option<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn integer_accepts_floats_and_strings() {
        assert_eq!(probe(r#"{"count": 42}"#).count, 42);
        assert_eq!(probe(r#"{"count": 42.9}"#).count, 42);
        assert_eq!(probe(r#"{"count": " 17 "}"#).count, 17);
        assert_eq!(probe(r#"{"count": "-3.5"}"#).count, -3);
        assert_eq!(probe(r#"{"count": null}"#).count, 0);
        assert_eq!(probe("{}").count, 0);
    }

    #[test]
    fn integer_rejects_words() {
        let err = serde_json::from_str::<Probe>(r#"{"count": "çok"}"#).unwrap_err();
        assert!(err.to_string().contains("expected an integer"));
    }

    #[test]
    fn number_accepts_strings() {
        assert_eq!(probe(r#"{"share": 12.5}"#).share, 12.5);
        assert_eq!(probe(r#"{"share": "30"}"#).share, 30.0);
    }

    #[test]
    fn text_accepts_numbers() {
        assert_eq!(probe(r#"{"label": 2021}"#).label, "2021");
        assert_eq!(probe(r#"{"label": "2021"}"#).label, "2021");
        assert_eq!(probe(r#"{"label": null}"#).label, "");
    }

    #[test]
    fn optional_text_keeps_null() {
        assert_eq!(probe(r#"{"note": null}"#).note, None);
        assert_eq!(probe("{}").note, None);
        assert_eq!(probe(r#"{"note": "WHO"}"#).note.as_deref(), Some("WHO"));
    }
}
