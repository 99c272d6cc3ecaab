use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Miss, ParseResult};

/// Parser that matches a double-quoted string and returns its unescaped
/// contents. Recognized escapes are `\b \f \n \r \t \\ \"`; anything
/// else after a backslash is a miss, as is a missing closing quote.
/// Bytes between the quotes are copied verbatim otherwise, so UTF-8 text
/// passes through untouched.
pub fn quoted_string() -> QuotedStringParser {
    QuotedStringParser
}

pub struct QuotedStringParser;

impl<'code> Parser<'code> for QuotedStringParser {
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let bytes = cursor.bytes();
        if bytes.first() != Some(&b'"') {
            return Err(Miss::at(cursor));
        }

        let mut unescaped = Vec::new();
        let mut i = 1;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    let text = String::from_utf8(unescaped).map_err(|_| Miss::at(cursor))?;
                    return Ok((text, cursor.advance(i + 1)));
                }
                b'\\' => {
                    let escaped = match bytes.get(i + 1) {
                        Some(b'b') => b'\x08',
                        Some(b'f') => b'\x0c',
                        Some(b'n') => b'\n',
                        Some(b'r') => b'\r',
                        Some(b't') => b'\t',
                        Some(b'\\') => b'\\',
                        Some(b'"') => b'"',
                        _ => return Err(Miss::at(cursor)),
                    };
                    unescaped.push(escaped);
                    i += 2;
                }
                byte => {
                    unescaped.push(byte);
                    i += 1;
                }
            }
        }

        // ran out of input before the closing quote
        Err(Miss::at(cursor))
    }
}
