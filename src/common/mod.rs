pub mod storage;
pub mod style;

use chrono::Utc;

/// Milliseconds since the epoch, used as the id source for list items.
pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// Default-on-read policy for content fields: render a fallback instead of
/// an empty hole when a field has been blanked out.
pub fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
