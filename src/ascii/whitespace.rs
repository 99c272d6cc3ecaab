use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser that consumes a run of zero or more ASCII whitespace bytes
/// (space, tab, newline, carriage return) and yields how many it ate.
/// Zero is a fine run, so this parser can never fail. It is the
/// canonical always-good leaf.
pub struct Whitespace;

impl<'code> Parser<'code> for Whitespace {
    type Output = usize;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code> PureParser<'code> for Whitespace {
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let count = cursor
            .bytes()
            .iter()
            .take_while(|byte| matches!(byte, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        (count, cursor.advance(count))
    }
}

/// Creates a parser consuming zero or more ASCII whitespace bytes
pub fn whitespace() -> Whitespace {
    Whitespace
}
