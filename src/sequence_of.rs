use crate::between::Between;
use crate::cursor::Cursor;
use crate::literal::{Token, token};
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that collects zero or more elements separated by a
/// separator. The default separator is a comma with surrounding
/// whitespace; swap it with [`SequenceOf::separated_by`].
///
/// An empty list is a success with an empty `Vec`, so the bare sequence
/// is always good. A separator not followed by an element is not
/// consumed; the list ends just before it. For a bracketed list use
/// [`SequenceOf::delimited`], which wraps the sequence in literal
/// delimiters and is fallible like any delimiter match.
pub struct SequenceOf<E, S> {
    element: E,
    separator: S,
}

impl<E> SequenceOf<E, Token> {
    pub fn new(element: E) -> Self {
        SequenceOf {
            element,
            separator: token(","),
        }
    }
}

impl<E, S> SequenceOf<E, S> {
    /// Replaces the default comma separator
    pub fn separated_by<S2>(self, separator: S2) -> SequenceOf<E, S2> {
        SequenceOf {
            element: self.element,
            separator,
        }
    }

    /// Wraps the sequence in literal delimiters, whitespace-tolerant:
    /// `sequence_of(i64()).delimited("[", "]")` parses `[1, 2, 3]`
    pub fn delimited(self, open: &'static str, close: &'static str) -> Between<Token, Self, Token> {
        Between::new(token(open), self, token(close))
    }
}

impl<'code, E, S> Parser<'code> for SequenceOf<E, S>
where
    E: Parser<'code>,
    S: Parser<'code>,
{
    type Output = Vec<E::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code, E, S> PureParser<'code> for SequenceOf<E, S>
where
    E: Parser<'code>,
    S: Parser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let mut items = Vec::new();

        let mut current = match self.element.parse(cursor) {
            Ok((first, next)) => {
                items.push(first);
                next
            }
            Err(_) => return (items, cursor),
        };

        loop {
            // separator and element commit together or not at all
            let after_separator = match self.separator.parse(current) {
                Ok((_, next)) => next,
                Err(_) => break,
            };
            match self.element.parse(after_separator) {
                Ok((item, next)) => {
                    items.push(item);
                    current = next;
                }
                Err(_) => break,
            }
        }

        (items, current)
    }
}

/// Convenience function to create a comma-separated SequenceOf parser
pub fn sequence_of<'code, E>(element: E) -> SequenceOf<E, Token>
where
    E: Parser<'code>,
{
    SequenceOf::new(element)
}
