use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that matches zero or more occurrences of the given
/// parser. Zero matches is a success with an empty collection, so `Many`
/// is always good no matter what it wraps. The cursor stops just before
/// the first miss of the inner parser.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parse_pure(cursor))
    }
}

impl<'code, P> PureParser<'code> for Many<P>
where
    P: Parser<'code>,
{
    fn parse_pure(&self, mut cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let mut results = Vec::new();

        while let Ok((value, next)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next;
        }

        (results, cursor)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_many_zero_matches() {
        let parser = many(literal("a"));

        let (results, cursor) = parser.parse(Cursor::from("xyz")).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor, "xyz");
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(literal("a"));

        let (results, cursor) = parser.parse(Cursor::from("aaabcd")).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(cursor, "bcd");
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(literal("a"));

        let (results, cursor) = parser.parse(Cursor::from("aaaa")).unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(cursor, "");
    }

    #[test]
    fn test_many_empty_input_is_still_good() {
        let parser = many(literal("a"));

        let (results, cursor) = parser.parse_pure(Cursor::from(""));
        assert!(results.is_empty());
        assert_eq!(cursor, "");
    }
}
