use crate::cursor::Cursor;
use crate::result::{ParseResult, PureResult};

/// Core parser trait.
///
/// A parser is a pure function from a cursor to a result. On success the
/// returned cursor is positioned after the consumed input; on failure the
/// miss carries the input cursor and nothing was consumed.
pub trait Parser<'code> {
    type Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// A parser statically certified to never fail.
///
/// Implementing this trait is the always-good certificate: combinators
/// that preserve the guarantee implement it conditionally on their
/// sub-parsers, so the property propagates bottom-up through a grammar at
/// composition time rather than being checked at runtime.
///
/// Implementations must keep `parse` and `parse_pure` in agreement:
/// `parser.parse(c) == Ok(parser.parse_pure(c))` for every cursor.
pub trait PureParser<'code>: Parser<'code> {
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> PureParser<'code> for &P
where
    P: PureParser<'code> + ?Sized,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        (**self).parse_pure(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> PureParser<'code> for Box<P>
where
    P: PureParser<'code> + ?Sized,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        (**self).parse_pure(cursor)
    }
}

/// A type-erased parser. Recursive grammars use this to break the
/// otherwise infinite type recursion of `impl Parser` trees.
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
