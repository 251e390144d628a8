// src/common/helpers.rs
//! Small helpers: credential/token generation, file encoding, regex
//! checks, and serde adapters for the wire date format.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const USERNAME_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Base64 contents of the file at `path`, or `None` when it cannot be
/// read.
pub fn file_to_blob(path: impl AsRef<Path>) -> Option<String> {
    std::fs::read(path).ok().map(|bytes| STANDARD.encode(bytes))
}

fn random_string(charset: &[u8], length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let c = charset.choose(&mut rng).copied().unwrap_or(b'0');
            c as char
        })
        .collect()
}

/// Random alphanumeric username.
pub fn generate_random_username(length: usize) -> String {
    random_string(USERNAME_CHARSET, length)
}

/// Random password over letters, digits, and punctuation.
pub fn generate_random_password(length: usize) -> String {
    random_string(PASSWORD_CHARSET, length)
}

/// Unique 32-character identifier (UUID v4 without hyphens).
pub fn generate_unique_number() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Six-digit one-time password.
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    (0..6).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// Whether `value` matches `pattern`. The pattern is compiled per call, so
/// prefer a static `Regex` for hot paths.
pub fn matches_pattern(value: &str, pattern: &str) -> Result<bool, regex::Error> {
    Ok(regex::Regex::new(pattern)?.is_match(value))
}

/// Serializes a UTC timestamp in the `YYYY-MM-DD HH:MM:SS` wire format.
pub fn serialize_datetime<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
}

/// Deserializes a UTC timestamp from the `YYYY-MM-DD HH:MM:SS` wire
/// format.
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let naive = NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
        .map_err(serde::de::Error::custom)?;
    Ok(Utc.from_utc_datetime(&naive))
}
