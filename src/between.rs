use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{Miss, ParseResult, PureResult};

/// Parser that matches content between opening and closing delimiters.
///
/// Parses `open content close` and yields just the content value with
/// the delimiter values discarded. Any of the three missing makes the
/// whole thing miss at its own input cursor.
///
/// # Examples
/// - `between(literal("("), i64(), literal(")"))` on `"(42)"` → `42`
/// - `"[content]"` → `"content"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, next) = self.open.parse(cursor)?;
        let (value, next) = self.content.parse(next).map_err(|_| Miss::at(cursor))?;
        let (_, rest) = self.close.parse(next).map_err(|_| Miss::at(cursor))?;
        Ok((value, rest))
    }
}

impl<'code, P1, P2, P3> PureParser<'code> for Between<P1, P2, P3>
where
    P1: PureParser<'code>,
    P2: PureParser<'code>,
    P3: PureParser<'code>,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (_, next) = self.open.parse_pure(cursor);
        let (value, next) = self.content.parse_pure(next);
        let (_, rest) = self.close.parse_pure(next);
        (value, rest)
    }
}

/// Creates a parser that matches content between opening and closing
/// delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::{f64, i64};
    use crate::ascii::whitespace::whitespace;
    use crate::literal::literal;

    #[test]
    fn test_parentheses_number() {
        let parser = between(literal("("), i64(), literal(")"));

        let (value, cursor) = parser.parse(Cursor::from("(42)")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(cursor, "");
    }

    #[test]
    fn test_brackets_float() {
        let parser = between(literal("["), f64(), literal("]"));

        let (value, cursor) = parser.parse(Cursor::from("[42.5]")).unwrap();
        assert!((value - 42.5).abs() < f64::EPSILON);
        assert_eq!(cursor, "");
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(literal("("), i64(), literal(")"));

        let input = Cursor::from("42)");
        assert!(parser.parse(input).is_err());
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(literal("("), i64(), literal(")"));

        let input = Cursor::from("(42");
        let miss = parser.parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_whitespace_enclosed_is_pure() {
        let parser = between(whitespace(), whitespace(), whitespace());
        let (_, cursor) = parser.parse_pure(Cursor::from("   x"));
        assert_eq!(cursor, "x");
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = between(literal("("), i64(), literal(")"));

        let (value, cursor) = parser.parse(Cursor::from("(7) extra")).unwrap();
        assert_eq!(value, 7);
        assert_eq!(cursor, " extra");
    }
}
