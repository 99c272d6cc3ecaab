use crate::ascii::whitespace::whitespace;
use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult};

/// Parser that matches an exact text prefix and consumes it. The matched
/// text carries no payload, so the output is `()`.
pub struct Literal {
    text: &'static str,
}

impl<'code> Parser<'code> for Literal {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.starts_with(self.text.as_bytes()) {
            Ok(((), cursor.advance(self.text.len())))
        } else {
            Err(Miss::at(cursor))
        }
    }
}

/// Creates a parser matching the exact prefix `text`
pub fn literal(text: &'static str) -> Literal {
    Literal { text }
}

/// Parser that matches a text prefix with any amount of surrounding
/// whitespace: `token(",")` recognizes `", "`, `" , "`, `",\n"` and so
/// on. Output is `()` like [`Literal`].
pub struct Token {
    text: &'static str,
}

impl<'code> Parser<'code> for Token {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, next) = whitespace().parse_pure(cursor);
        if !next.starts_with(self.text.as_bytes()) {
            return Err(Miss::at(cursor));
        }
        let (_, rest) = whitespace().parse_pure(next.advance(self.text.len()));
        Ok(((), rest))
    }
}

/// Creates a parser matching `text` with surrounding whitespace skipped
pub fn token(text: &'static str) -> Token {
    Token { text }
}
