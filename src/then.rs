use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult, PureResult};

/// Parser combinator that sequences two parsers and keeps only the
/// second value. This is the "match but discard" rule for grammars where
/// leading punctuation carries no payload: `then(literal(","), value)`
/// consumes the comma and yields the value.
///
/// Chained, `a.then(b).then(c)` matches `a b c` and yields `c`'s value;
/// only the last parser's payload survives.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, next) = self.parser1.parse(cursor)?;
        self.parser2.parse(next).map_err(|_| Miss::at(cursor))
    }
}

impl<'code, P1, P2> PureParser<'code> for Then<P1, P2>
where
    P1: PureParser<'code>,
    P2: PureParser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (_, next) = self.parser1.parse_pure(cursor);
        self.parser2.parse_pure(next)
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::i64;
    use crate::ascii::whitespace::whitespace;
    use crate::literal::literal;
    use crate::map::MapExt;

    #[test]
    fn test_then_keeps_last_value() {
        let parser = literal(",").then(i64());

        let (value, cursor) = parser.parse(Cursor::from(",42 rest")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor, " rest");
    }

    #[test]
    fn test_then_chain_discards_intermediates() {
        let parser = literal("{").then(whitespace()).then(i64());

        let (value, cursor) = parser.parse(Cursor::from("{  7}")).unwrap();
        assert_eq!(value, 7);
        assert_eq!(cursor, "}");
    }

    #[test]
    fn test_then_first_fails() {
        let parser = literal(",").then(i64());

        let input = Cursor::from("42");
        let miss = parser.parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_then_second_fails_without_consuming() {
        let parser = literal(",").then(i64());

        let input = Cursor::from(",x");
        let miss = parser.parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_then_of_pure_parsers_is_pure() {
        let parser = whitespace().then(whitespace().map(|count| count == 0));
        let (no_second_run, cursor) = parser.parse_pure(Cursor::from("   abc"));
        assert!(no_second_run);
        assert_eq!(cursor, "abc");
    }

    #[test]
    fn test_then_function_syntax() {
        let parser = then(literal("("), i64());
        let (value, _) = parser.parse(Cursor::from("(5")).unwrap();
        assert_eq!(value, 5);
    }
}
