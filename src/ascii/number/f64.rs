use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Miss, ParseResult};

/// Parser that matches ASCII floating point numbers: optional sign,
/// integer digits, optional fraction, optional exponent. The matched
/// span is handed to the standard library float parser, so values round
/// the same way as `"1.5e3".parse::<f64>()`.
pub fn f64() -> FloatParser {
    FloatParser
}

pub struct FloatParser;

/// Length of the longest float-shaped prefix, or None if the bytes do
/// not start with one.
fn float_span(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        i += 1;
    }

    let digits = |bytes: &[u8], mut i: usize| {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        (i, i > start)
    };

    let (next, any) = digits(bytes, i);
    if !any {
        return None;
    }
    i = next;

    if bytes.get(i) == Some(&b'.') {
        let (next, any) = digits(bytes, i + 1);
        if !any {
            return None;
        }
        i = next;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'-') | Some(b'+')) {
            j += 1;
        }
        let (next, any) = digits(bytes, j);
        // a dangling exponent marker is not part of the number
        if any {
            i = next;
        }
    }

    Some(i)
}

impl<'code> Parser<'code> for FloatParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let span = float_span(cursor.bytes()).ok_or(Miss::at(cursor))?;
        let text = cursor.slice(0, span).as_str().ok_or(Miss::at(cursor))?;
        let value = text.parse::<f64>().map_err(|_| Miss::at(cursor))?;
        Ok((value, cursor.advance(span)))
    }
}
