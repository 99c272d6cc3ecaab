use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Miss, ParseResult};

/// Parser that matches one or more ASCII digits and returns them as a
/// u64. A value that would overflow is a miss, not a panic.
pub fn u64() -> UIntParser {
    UIntParser
}

pub struct UIntParser;

impl<'code> Parser<'code> for UIntParser {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut value: u64 = 0;
        let mut consumed = 0;

        for &byte in cursor.bytes() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((byte - b'0') as u64))
                .ok_or(Miss::at(cursor))?;
            consumed += 1;
        }

        if consumed == 0 {
            return Err(Miss::at(cursor));
        }
        Ok((value, cursor.advance(consumed)))
    }
}
