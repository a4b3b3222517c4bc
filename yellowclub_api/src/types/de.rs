//! Lenient decoding: the backend sends amounts both as JSON numbers and as
//! numeric strings, flags as `0`/`1`, and timestamps in more than one layout.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Num(f64),
    Str(String),
}

fn parse(raw: Lenient) -> Result<f64, String> {
    match raw {
        Lenient::Num(n) => Ok(n),
        Lenient::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("expected a number, got {:?}", s)),
    }
}

pub(crate) fn f64_lenient<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    parse(Lenient::deserialize(d)?).map_err(de::Error::custom)
}

pub(crate) fn opt_f64_lenient<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<Lenient>::deserialize(d)? {
        Some(Lenient::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => parse(raw).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Whole numbers sent as `10`, `10.0` or `"10"`.
pub(crate) fn opt_i64_lenient<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    match opt_f64_lenient(d)? {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Ok(Some(n as i64)),
        Some(n) => Err(de::Error::custom(format!("expected an integer, got {}", n))),
        None => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientBool {
    Bool(bool),
    Num(i64),
    Str(String),
}

pub(crate) fn default_true() -> bool {
    true
}

/// Accepts `true`/`false`, `1`/`0`, and their string forms. `null` reads as
/// `true`, the same as a missing key on fields defaulting to [`default_true`].
pub(crate) fn bool_lenient_or_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match Option::<LenientBool>::deserialize(d)? {
        None => Ok(true),
        Some(LenientBool::Bool(b)) => Ok(b),
        Some(LenientBool::Num(n)) => Ok(n != 0),
        Some(LenientBool::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "sim" | "yes" => Ok(true),
            "0" | "false" | "nao" | "não" | "no" | "" => Ok(false),
            other => Err(de::Error::custom(format!("expected a boolean, got {:?}", other))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Str(String),
    Other(de::IgnoredAny),
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// RFC 3339 or a zone-less `YYYY-MM-DD HH:MM:SS` taken as UTC. Anything else,
/// including non-string values, reads as `None`.
pub(crate) fn opt_datetime_lenient<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Option::<LenientText>::deserialize(d)? {
        Some(LenientText::Str(s)) => parse_datetime(&s),
        Some(LenientText::Other(_)) | None => None,
    })
}
