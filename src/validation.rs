use crate::error::{GiftError, GiftResult};

/// Longest name, wish or description the store accepts.
pub const MAX_TEXT_LEN: usize = 255;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> GiftResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(GiftError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a string fits in `max` characters.
pub fn max_len(value: String, field: &str, max: usize) -> GiftResult<String> {
    if value.chars().count() > max {
        Err(GiftError::TooLong {
            field: field.to_string(),
            max,
        })
    } else {
        Ok(value)
    }
}

/// Non-blank, trimmed, and at most [`MAX_TEXT_LEN`] characters.
pub fn bounded_text(value: &str, field: &str) -> GiftResult<String> {
    max_len(non_blank(value, field)?, field, MAX_TEXT_LEN)
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Like [`trim_optional`], but rejects values longer than [`MAX_TEXT_LEN`].
pub fn bounded_optional(value: Option<&str>, field: &str) -> GiftResult<Option<String>> {
    trim_optional(value)
        .map(|s| max_len(s, field, MAX_TEXT_LEN))
        .transpose()
}
