use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that converts any outcome of the inner parser into
/// a success: `Some(value)` with the cursor advanced on a hit, `None`
/// with the cursor unchanged on a miss.
///
/// This is the primitive that lets call sites loop "while there is
/// another element" without the loop itself ever failing, so `TryParse`
/// is always good regardless of what it wraps.
pub struct TryParse<P> {
    parser: P,
}

impl<P> TryParse<P> {
    pub fn new(parser: P) -> Self {
        TryParse { parser }
    }
}

impl<'code, P> Parser<'code> for TryParse<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code, P> PureParser<'code> for TryParse<P>
where
    P: Parser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, next)) => (Some(value), next),
            Err(_) => (None, cursor),
        }
    }
}

/// Convenience function to create a TryParse parser
pub fn try_parse<'code, P>(parser: P) -> TryParse<P>
where
    P: Parser<'code>,
{
    TryParse::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait TryParseExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> TryParse<Self> {
        TryParse::new(self)
    }
}

/// Implement TryParseExt for all parsers
impl<'code, P> TryParseExt<'code> for P where P: Parser<'code> {}
