use crate::cursor::Cursor;
use crate::many::many;
use crate::parser::{Parser, PureParser};
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given
/// parser. Unlike [`many`], a first miss is a miss of the whole
/// combinator, so `Some` is fallible.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, next) = self.parser.parse(cursor)?;
        let (rest, cursor) = many(&self.parser).parse_pure(next);
        let mut results = vec![first];
        results.extend(rest);
        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_some_zero_matches_fails() {
        let parser = some(literal("a"));

        let input = Cursor::from("xyz");
        let miss = parser.parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_some_one_match() {
        let parser = some(literal("a"));

        let (results, cursor) = parser.parse(Cursor::from("abc")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(cursor, "bc");
    }

    #[test]
    fn test_some_multiple_matches() {
        let parser = some(literal("a"));

        let (results, cursor) = parser.parse(Cursor::from("aaabcd")).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(cursor, "bcd");
    }

    #[test]
    fn test_some_empty_input_fails() {
        let parser = some(literal("a"));

        assert!(parser.parse(Cursor::from("")).is_err());
    }
}
