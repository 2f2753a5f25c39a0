//! Deserializers for fields whose JSON type varies between the browser client and the model.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or boolean and keeps its textual form. `null` becomes "".
pub fn string_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or scalar, found {}",
            other
        ))),
    }
}

/// Accepts `true`/`false` or their string spellings.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::String(s) => Ok(s.trim().eq_ignore_ascii_case("true")),
        Value::Number(n) => Ok(n.as_i64().is_some_and(|v| v != 0)),
        Value::Null => Ok(false),
        other => Err(de::Error::custom(format!("expected a boolean, found {}", other))),
    }
}

/// Accepts a number or a numeric string and clamps it into 0..=100.
pub fn score_0_to_100<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('点').trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| de::Error::custom("score must be a number between 0 and 100"))?;

    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

/// Non-negative integer that tolerates junk: anything non-numeric becomes 0.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse_count(&Value::deserialize(deserializer)?).unwrap_or(0))
}

/// Optional integer that must be numeric when present. `null` counts as absent.
pub fn optional_strict_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    parse_count(&value)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid count: {}", value)))
}

fn parse_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                // Whole floats such as `3.0` count as integers.
                n.as_f64()
                    .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u32::MAX))
                    .map(|v| v as u64)
            })
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_scalar")]
        text: String,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "count_or_zero")]
        count: u32,
    }

    #[derive(Deserialize)]
    struct ScoreProbe {
        #[serde(deserialize_with = "score_0_to_100")]
        score: u8,
    }

    #[derive(Deserialize)]
    struct StrictProbe {
        #[serde(default, deserialize_with = "optional_strict_count")]
        count: Option<u32>,
    }

    #[test]
    fn string_or_scalar_keeps_numbers_as_text() {
        let probe: Probe = serde_json::from_value(json!({ "text": 42 })).unwrap();
        assert_eq!(probe.text, "42");

        let probe: Probe = serde_json::from_value(json!({ "text": null })).unwrap();
        assert_eq!(probe.text, "");
    }

    #[test]
    fn lenient_bool_reads_string_spellings() {
        let probe: Probe = serde_json::from_value(json!({ "flag": " TRUE " })).unwrap();
        assert!(probe.flag);

        let probe: Probe = serde_json::from_value(json!({ "flag": "false" })).unwrap();
        assert!(!probe.flag);
    }

    #[test]
    fn count_or_zero_coerces_junk() {
        let probe: Probe = serde_json::from_value(json!({ "count": "abc" })).unwrap();
        assert_eq!(probe.count, 0);

        let probe: Probe = serde_json::from_value(json!({ "count": "7" })).unwrap();
        assert_eq!(probe.count, 7);

        let probe: Probe = serde_json::from_value(json!({ "count": -3 })).unwrap();
        assert_eq!(probe.count, 0);
    }

    #[test]
    fn score_is_clamped_and_parsed_from_strings() {
        let probe: ScoreProbe = serde_json::from_value(json!({ "score": "85点" })).unwrap();
        assert_eq!(probe.score, 85);

        let probe: ScoreProbe = serde_json::from_value(json!({ "score": 140 })).unwrap();
        assert_eq!(probe.score, 100);

        assert!(serde_json::from_value::<ScoreProbe>(json!({ "score": "many" })).is_err());
    }

    #[test]
    fn optional_strict_count_rejects_non_numeric() {
        let probe: StrictProbe = serde_json::from_value(json!({ "count": "3" })).unwrap();
        assert_eq!(probe.count, Some(3));

        let probe: StrictProbe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(probe.count, None);

        assert!(serde_json::from_value::<StrictProbe>(json!({ "count": "three" })).is_err());
    }

    #[test]
    fn whole_float_counts_are_integers() {
        let probe: StrictProbe = serde_json::from_value(json!({ "count": 3.0 })).unwrap();
        assert_eq!(probe.count, Some(3));

        assert!(serde_json::from_value::<StrictProbe>(json!({ "count": 3.5 })).is_err());
        assert!(serde_json::from_value::<StrictProbe>(json!({ "count": -2.0 })).is_err());

        let probe: Probe = serde_json::from_value(json!({ "count": 4.0 })).unwrap();
        assert_eq!(probe.count, 4);
    }
}
