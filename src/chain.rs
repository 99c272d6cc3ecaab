use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult, PureResult};

/// Sequencing state threaded through a [`chain`] body. Each [`step`]
/// runs a parser at the current position and commits the new position
/// on success; on a miss the step reports the chain's *starting*
/// cursor, so `?` aborts the whole composite as if it never consumed
/// anything.
///
/// [`step`]: Chain::step
pub struct Chain<'code> {
    start: Cursor<'code>,
    current: Cursor<'code>,
}

impl<'code> Chain<'code> {
    fn new(cursor: Cursor<'code>) -> Self {
        Chain {
            start: cursor,
            current: cursor,
        }
    }

    /// The position the next step will parse from
    pub fn cursor(&self) -> Cursor<'code> {
        self.current
    }

    /// Runs a parser at the current position. Success yields the value
    /// and advances the chain; a miss rewinds to the chain's start.
    pub fn step<P>(&mut self, parser: P) -> Result<P::Output, Miss<'code>>
    where
        P: Parser<'code>,
    {
        match parser.parse(self.current) {
            Ok((value, next)) => {
                self.current = next;
                Ok(value)
            }
            Err(_) => Err(Miss::at(self.start)),
        }
    }

    /// Like [`step`](Chain::step) but for parsers that cannot miss, so
    /// there is no `Result` to unwrap at the call site.
    pub fn step_pure<P>(&mut self, parser: P) -> P::Output
    where
        P: PureParser<'code>,
    {
        let (value, next) = parser.parse_pure(self.current);
        self.current = next;
        value
    }
}

/// Parser written as straight-line steps over a [`Chain`]
pub struct Chained<F> {
    body: F,
}

impl<'code, T, F> Parser<'code> for Chained<F>
where
    F: Fn(&mut Chain<'code>) -> Result<T, Miss<'code>>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut chain = Chain::new(cursor);
        match (self.body)(&mut chain) {
            Ok(value) => Ok((value, chain.current)),
            Err(_) => Err(Miss::at(cursor)),
        }
    }
}

/// Builds a parser from a sequence of steps written as ordinary
/// imperative code. Intermediate values bind to plain `let`, failures
/// propagate with `?`:
///
/// ```
/// use parsnip::ascii::number::i64;
/// use parsnip::chain::chain;
/// use parsnip::cursor::Cursor;
/// use parsnip::literal::token;
/// use parsnip::parser::Parser;
/// use parsnip::quoted_string::quoted_string;
///
/// let member = chain(|c| {
///     let key = c.step(quoted_string())?;
///     c.step(token(":"))?;
///     let value = c.step(i64())?;
///     Ok((key, value))
/// });
///
/// let ((key, value), rest) = member.parse(Cursor::from("\"age\": 7!")).unwrap();
/// assert_eq!(key, "age");
/// assert_eq!(value, 7);
/// assert_eq!(rest, "!");
/// ```
pub fn chain<'code, T, F>(body: F) -> Chained<F>
where
    F: Fn(&mut Chain<'code>) -> Result<T, Miss<'code>>,
{
    Chained { body }
}

/// Parser built from steps that cannot miss; see [`pure_chain`]
pub struct PureChained<F> {
    body: F,
}

impl<'code, T, F> Parser<'code> for PureChained<F>
where
    F: Fn(&mut Chain<'code>) -> T,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code, T, F> PureParser<'code> for PureChained<F>
where
    F: Fn(&mut Chain<'code>) -> T,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let mut chain = Chain::new(cursor);
        let value = (self.body)(&mut chain);
        (value, chain.current)
    }
}

/// Like [`chain`] but every step is [`step_pure`](Chain::step_pure),
/// so the body returns a bare value and the resulting parser is
/// always good
pub fn pure_chain<'code, T, F>(body: F) -> PureChained<F>
where
    F: Fn(&mut Chain<'code>) -> T,
{
    PureChained { body }
}
