use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult, PureResult};

/// Parser combinator that tries the first parser, and if it fails, tries
/// the second parser from the same cursor. No rollback is needed: the
/// first attempt worked on its own cursor copy. When every alternative
/// misses, the miss is at the original input cursor.
///
/// Chaining `.or()` gives ordered n-ary alternation; the first success
/// wins regardless of what later alternatives would do.
///
/// An `Or` is always-good when its *second* parser is: that branch is the
/// unconditional fallback. Put an infallible alternative last, since
/// anything after it would be unreachable anyway.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(hit) => Ok(hit),
            Err(_) => self.parser2.parse(cursor).map_err(|_| Miss::at(cursor)),
        }
    }
}

impl<'code, P1, P2, O> PureParser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: PureParser<'code, Output = O>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(hit) => hit,
            Err(_) => self.parser2.parse_pure(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
