/// A field value together with the cursor position just past its span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub end: usize,
}

/// Extract a quoted field whose opening quote sits at `start`.
///
/// The closing quote is the first quote not paired with a following quote, and
/// it must be followed by the delimiter, a CR/LF, or the end of text. A trailing
/// delimiter is consumed; a terminator is left for the scanner. Returns `None`
/// when no such closing quote exists.
pub fn quoted(text: &str, start: usize, delimiter: char, quote: char) -> Option<Field> {
    let content_start = start + quote.len_utf8();
    let mut value = String::new();
    let mut chars = text[content_start..].char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if ch != quote {
            value.push(ch);
            continue;
        }

        let close = content_start + offset + quote.len_utf8();
        match chars.peek().map(|&(_, next)| next) {
            Some(next) if next == quote => {
                // Escaped quote
                value.push(quote);
                chars.next();
            }
            Some('\r' | '\n') | None => return Some(Field { value, end: close }),
            Some(next) if next == delimiter => {
                return Some(Field {
                    value,
                    end: close + delimiter.len_utf8(),
                });
            }
            Some(_) => return None,
        }
    }

    None
}

/// Extract an unquoted field starting at `start`, taken verbatim up to the next
/// delimiter, CR/LF, or end of text. A trailing delimiter is consumed, unless it
/// is itself a line terminator, which always ends the record.
pub fn unquoted(text: &str, start: usize, delimiter: char) -> Field {
    let rest = &text[start..];

    match rest.find(|c: char| c == delimiter || c == '\r' || c == '\n') {
        Some(len) if !is_terminator(delimiter) && rest[len..].starts_with(delimiter) => Field {
            value: rest[..len].to_string(),
            end: start + len + delimiter.len_utf8(),
        },
        Some(len) => Field {
            value: rest[..len].to_string(),
            end: start + len,
        },
        None => Field {
            value: rest.to_string(),
            end: text.len(),
        },
    }
}

fn is_terminator(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}
