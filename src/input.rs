use anyhow::{Context, Result};

/// Textual forms that stand for "no timestamp".
const EMPTY_MARKERS: [&str; 2] = ["null", "undefined"];

/// Parse a raw timestamp (milliseconds since epoch) from user input.
///
/// Blank input and the `null` / `undefined` markers yield `Ok(None)`.
/// Anything that is not a signed 64-bit integer is rejected.
pub fn parse_timestamp(raw: &str) -> Result<Option<i64>> {
    let raw = raw.trim();

    if raw.is_empty()
        || EMPTY_MARKERS
            .iter()
            .any(|marker| raw.eq_ignore_ascii_case(marker))
    {
        return Ok(None);
    }

    let millis = raw.parse::<i64>().with_context(|| {
        format!(
            "Invalid timestamp '{}': expected milliseconds since epoch",
            raw
        )
    })?;

    Ok(Some(millis))
}
