//! Random strings, tokens and message identifiers.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Local, TimeZone};
use rand::{Rng, RngCore};

/// Generates an alphanumeric string of exactly `length` characters.
///
/// Random bytes are base64 encoded and the non-alphanumeric symbols
/// (`/`, `+`, `=`) are discarded, repeating until enough characters exist.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(length);

    while out.len() < length {
        let missing = length - out.len();
        let mut bytes = vec![0u8; missing];
        rng.fill_bytes(&mut bytes);

        out.extend(
            STANDARD
                .encode(&bytes)
                .chars()
                .filter(|c| !matches!(c, '/' | '+' | '='))
                .take(missing),
        );
    }

    out
}

/// Generates an opaque 32 character lowercase hex token.
pub fn token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Builds a message id from the current local time.
///
/// See [`message_id_at`] for the layout.
pub fn message_id(prefix: &str) -> String {
    message_id_at(prefix, &Local::now())
}

/// Builds a message id for a given instant.
///
/// Layout: `prefix`, `YYYYmmddHHMMSS`, three digit milliseconds, then a
/// random number in `1000..=9999`.
pub fn message_id_at<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!(
        "{}{}{:03}{}",
        prefix,
        now.format("%Y%m%d%H%M%S"),
        now.timestamp_subsec_millis().min(999),
        suffix
    )
}
