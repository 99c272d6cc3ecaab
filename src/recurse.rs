use crate::cursor::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::result::ParseResult;
use std::sync::Arc;

/// A self-referential parser built as a fixed point.
///
/// `recurse` takes a function from a parser handle to a grammar body and
/// ties the knot: the handle it passes in *is* the parser being defined,
/// so the body can nest it inside itself (a JSON value contains JSON
/// arrays containing JSON values).
///
/// The body is re-derived from the builder on every invocation, so
/// construction never recurses. Only parsing does, and only as deep as
/// the input actually nests.
pub struct Recurse<'code, T> {
    build: Arc<dyn Fn(Recurse<'code, T>) -> BoxedParser<'code, T> + 'code>,
}

impl<'code, T> Clone for Recurse<'code, T> {
    fn clone(&self) -> Self {
        Recurse {
            build: Arc::clone(&self.build),
        }
    }
}

impl<'code, T> Parser<'code> for Recurse<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.build)(self.clone()).parse(cursor)
    }
}

/// Creates a parser defined in terms of itself. The builder receives
/// the parser under construction and returns the grammar body:
///
/// ```
/// use parsnip::between::between;
/// use parsnip::cursor::Cursor;
/// use parsnip::literal::literal;
/// use parsnip::map::MapExt;
/// use parsnip::parser::{BoxedExt, Parser};
/// use parsnip::recurse::recurse;
/// use parsnip::try_parse::TryParseExt;
///
/// // depth of a balanced bracket nest: "[[[]]]" -> 3
/// let nest = recurse(|nest| {
///     between(literal("["), nest.optional(), literal("]"))
///         .map(|inner: Option<u32>| inner.unwrap_or(0) + 1)
///         .boxed()
/// });
/// let (depth, rest) = nest.parse(Cursor::from("[[[]]]")).unwrap();
/// assert_eq!(depth, 3);
/// assert_eq!(rest, "");
/// ```
pub fn recurse<'code, T, F>(build: F) -> Recurse<'code, T>
where
    F: Fn(Recurse<'code, T>) -> BoxedParser<'code, T> + 'code,
{
    Recurse {
        build: Arc::new(build),
    }
}
