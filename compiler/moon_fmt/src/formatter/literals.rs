//! Literal rendering.

use std::fmt::Write;

use moon_lexer::TokenKind;

/// Beyond this, integral values are printed in exponent form.
const MAX_PLAIN_INTEGER: f64 = 1e15;

/// Whether a number prints with a leading `-`.
pub(super) fn is_negative(value: f64) -> bool {
    !value.is_nan() && value.is_sign_negative()
}

/// Render a number so that it lexes back to the same value.
///
/// Infinity prints as `1e999`, which overflows to infinity when lexed.
/// There is no literal for NaN or negative infinity, so those print as
/// `(0 / 0)` and `-1e999` and re-parse as a division and a negation rather
/// than as number literals.
pub(super) fn number(value: f64) -> String {
    if value.is_nan() {
        return "(0 / 0)".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "1e999" } else { "-1e999" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGER {
        // Display drops the fraction of integral values: `3`, `-0`.
        format!("{value}")
    } else {
        // Debug switches to exponent form for very large or small values.
        format!("{value:?}")
    }
}

/// Quote a string with `"`, escaping what the lexer would not read back
/// verbatim.
pub(super) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Three digits so a following digit is not read as part of the
            // escape.
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `text` can be written as a bare table key: `{text = v}`.
pub(super) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && TokenKind::keyword(text).is_none()
}
