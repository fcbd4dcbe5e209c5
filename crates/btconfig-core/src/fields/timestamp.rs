use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use super::decoded::{Decoded, decode_decimal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub seconds: Decoded<i64>,
    /// Calendar rendering, absent when the value is outside the supported range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<String>,
}

pub fn decode_timestamp(payload: &str) -> Timestamp {
    let seconds = decode_decimal::<i64>(payload);
    if !seconds.is_parsed() {
        tracing::warn!(payload, "timestamp is not a decimal integer");
    }
    Timestamp {
        seconds,
        calendar: format_calendar(seconds.value()),
    }
}

/// `ctime`-style rendering, always in UTC.
fn format_calendar(seconds: i64) -> Option<String> {
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
    );
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()
        .and_then(|dt| dt.format(format).ok())
}
