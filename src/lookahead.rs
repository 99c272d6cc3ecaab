use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that runs the inner parser and keeps its value or
/// failure, but resets the cursor to where it was before: a probe that
/// never consumes input.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, _) = self.parser.parse(cursor)?;
        Ok((value, cursor))
    }
}

impl<'code, P> PureParser<'code> for Lookahead<P>
where
    P: PureParser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (value, _) = self.parser.parse_pure(cursor);
        (value, cursor)
    }
}

/// Convenience function to create a Lookahead parser
pub fn lookahead<'code, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'code>,
{
    Lookahead::new(parser)
}
