//! Escape decoding for short strings.

/// Decode the body of a quoted string (delimiters already removed).
///
/// On failure returns the byte offset of the offending backslash.
pub(crate) fn unescape(body: &str) -> Result<String, usize> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, escaped)) = chars.next() else {
            return Err(offset);
        };
        match escaped {
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '\\' | '"' | '\'' => out.push(escaped),
            // A backslash-newline continues the string on the next line.
            '\n' | '\r' => {
                let pair = if escaped == '\n' { '\r' } else { '\n' };
                if chars.peek().is_some_and(|&(_, next)| next == pair) {
                    chars.next();
                }
                out.push('\n');
            }
            '0'..='9' => {
                let mut value = escaped.to_digit(10).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|&(_, d)| d.to_digit(10)) {
                        Some(digit) => {
                            value = value * 10 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if value > 255 {
                    return Err(offset);
                }
                out.push(char::from_u32(value).ok_or(offset)?);
            }
            _ => return Err(offset),
        }
    }

    Ok(out)
}

/// Body of a long bracket string: the first newline right after the opening
/// bracket is not part of the value.
pub(crate) fn long_string_body(raw: &str) -> &str {
    for prefix in ["\r\n", "\n\r", "\n", "\r"] {
        if let Some(rest) = raw.strip_prefix(prefix) {
            return rest;
        }
    }
    raw
}

#[cfg(test)]
mod tests;
