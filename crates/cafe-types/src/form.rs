//! Form field normalization helpers
//!
//! HTML forms and query strings deliver everything as optional strings; the
//! helpers here turn those into the domain's booleans and normalized text.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("not a boolean value: {0:?}")]
pub struct CheckboxParseError(pub String);

/// Parse a checkbox-style form field into a boolean.
///
/// An absent field means unchecked. Checked boxes arrive as "on" from plain
/// HTML forms, or as "true"/"1" from API clients. The literal "false" parses
/// as false; anything unrecognized is rejected rather than coerced.
pub fn parse_checkbox(value: Option<&str>) -> Result<bool, CheckboxParseError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "" | "off" | "false" | "0" => Ok(false),
        _ => Err(CheckboxParseError(value.to_string())),
    }
}

/// Title-case a location string: the first letter of each word is
/// uppercased, every other letter lowercased. Word boundaries are any
/// non-alphabetic character, so "covent garden" and "o'neil's" both
/// normalize the way a stored location would.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
