use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser that consumes nothing and yields a clone of a fixed value.
/// Trivially always good; its main use is as the fallback arm of an
/// alternation, which makes the whole alternation always good.
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code, T> PureParser<'code> for Pure<T>
where
    T: Clone,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        (self.value.clone(), cursor)
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}
