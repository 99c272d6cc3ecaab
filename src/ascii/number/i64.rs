use super::u64::u64;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::{Miss, ParseResult};

/// Parser that matches ASCII integer numbers (positive or negative)
pub fn i64() -> IntParser {
    IntParser
}

pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (negative, digits) = match cursor.first() {
            Some(b'-') => (true, cursor.advance(1)),
            Some(b'+') => (false, cursor.advance(1)),
            _ => (false, cursor),
        };

        let (magnitude, rest) = u64().parse(digits).map_err(|_| Miss::at(cursor))?;

        // i64::MIN has one more magnitude step than i64::MAX
        let value = if negative {
            if magnitude > i64::MAX as u64 + 1 {
                return Err(Miss::at(cursor));
            }
            (magnitude as i64).wrapping_neg()
        } else {
            if magnitude > i64::MAX as u64 {
                return Err(Miss::at(cursor));
            }
            magnitude as i64
        };

        Ok((value, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integer() {
        let (value, cursor) = i64().parse(Cursor::from("123abc")).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor, "abc");
    }

    #[test]
    fn test_negative_integer() {
        let (value, cursor) = i64().parse(Cursor::from("-456xyz")).unwrap();
        assert_eq!(value, -456);
        assert_eq!(cursor, "xyz");
    }

    #[test]
    fn test_integer_with_plus() {
        let (value, cursor) = i64().parse(Cursor::from("+789")).unwrap();
        assert_eq!(value, 789);
        assert_eq!(cursor, "");
    }

    #[test]
    fn test_zero() {
        let (value, _) = i64().parse(Cursor::from("0")).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_extremes() {
        let (value, _) = i64().parse(Cursor::from("9223372036854775807")).unwrap();
        assert_eq!(value, i64::MAX);

        let (value, _) = i64().parse(Cursor::from("-9223372036854775808")).unwrap();
        assert_eq!(value, i64::MIN);
    }

    #[test]
    fn test_overflow_is_a_miss() {
        assert!(i64().parse(Cursor::from("9223372036854775808")).is_err());
        assert!(i64().parse(Cursor::from("-9223372036854775809")).is_err());
    }

    #[test]
    fn test_no_digit_fails() {
        let input = Cursor::from("abc");
        let miss = i64().parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_minus_only_fails_at_input_cursor() {
        let input = Cursor::from("-abc");
        let miss = i64().parse(input).unwrap_err();
        // the sign byte is not consumed on a miss
        assert_eq!(miss.cursor(), input);
    }
}
