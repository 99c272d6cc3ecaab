use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Miss, ParseResult};

/// Parser that matches the literals `true` and `false` as a bool
pub fn boolean() -> BooleanParser {
    BooleanParser
}

pub struct BooleanParser;

impl<'code> Parser<'code> for BooleanParser {
    type Output = bool;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.starts_with(b"true") {
            return Ok((true, cursor.advance(4)));
        }
        if cursor.starts_with(b"false") {
            return Ok((false, cursor.advance(5)));
        }
        Err(Miss::at(cursor))
    }
}
