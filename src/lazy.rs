use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until
/// parse time. This is useful for breaking mutual recursion between
/// parsers; for a parser that refers to *itself* see
/// [`recurse`](crate::recurse::recurse).
pub struct Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    factory: F,
    _phantom: PhantomData<&'code ()>,
}

impl<'code, F, P> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.factory)().parse(cursor)
    }
}

impl<'code, F, P> PureParser<'code> for Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: PureParser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        (self.factory)().parse_pure(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<'code, F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
