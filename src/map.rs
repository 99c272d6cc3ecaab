use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that transforms the output of a parser using a
/// mapping function. The mapper runs on success only; misses pass through
/// untouched, and the always-good certificate of the inner parser is
/// preserved.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

impl<'code, P, F, U> PureParser<'code> for Map<P, F>
where
    P: PureParser<'code>,
    F: Fn(P::Output) -> U,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse_pure(cursor);
        ((self.mapper)(value), cursor)
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
