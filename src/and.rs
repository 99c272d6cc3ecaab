use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult, PureResult};

/// Parser combinator that sequences two parsers and returns both results
/// as a tuple.
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat ones; Rust has no variadic
/// generics, and the nested destructuring pattern keeps the parse order
/// explicit.
///
/// If either half misses, the whole sequence misses at the cursor the
/// sequence itself was invoked with; a half-consumed `And` is never
/// observable.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, next) = self.parser1.parse(cursor)?;
        let (second, rest) = self.parser2.parse(next).map_err(|_| Miss::at(cursor))?;
        Ok(((first, second), rest))
    }
}

impl<'code, P1, P2> PureParser<'code> for And<P1, P2>
where
    P1: PureParser<'code>,
    P2: PureParser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (first, next) = self.parser1.parse_pure(cursor);
        let (second, rest) = self.parser2.parse_pure(next);
        ((first, second), rest)
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
