//! Score serialization.
//!
//! Skill scores may legitimately be NaN or infinite. JSON has no literal for
//! those, so finite scores are written as numbers and the rest as the strings
//! `"NaN"`, `"inf"` and `"-inf"`. Use with `#[serde(with = "crate::score")]`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

const NAN: &str = "NaN";
const INF: &str = "inf";
const NEG_INF: &str = "-inf";

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if *value == f64::INFINITY {
        serializer.serialize_str(INF)
    } else if *value == f64::NEG_INFINITY {
        serializer.serialize_str(NEG_INF)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match ScoreRepr::deserialize(deserializer)? {
        ScoreRepr::Number(n) => Ok(n),
        ScoreRepr::Text(s) => match s.as_str() {
            NAN => Ok(f64::NAN),
            INF => Ok(f64::INFINITY),
            NEG_INF => Ok(f64::NEG_INFINITY),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"NaN\", \"inf\" or \"-inf\"",
            )),
        },
    }
}
