use crate::cursor::Cursor;
use crate::parser::{Parser, PureParser};
use crate::result::{ParseResult, PureResult};

/// Parser combinator that parses an initial value and then folds zero or
/// more `rest` matches into it, left to right.
///
/// The fold stops (without failing) at the first miss of `rest`, leaving
/// the cursor just before that attempt. The only way the whole fold
/// misses is `initial` missing, so the fold is always good whenever
/// `initial` is.
pub struct FoldLeft<P, R, F> {
    initial: P,
    rest: R,
    op: F,
}

impl<P, R, F> FoldLeft<P, R, F> {
    pub fn new(initial: P, rest: R, op: F) -> Self {
        FoldLeft { initial, rest, op }
    }
}

impl<'code, P, R, F> Parser<'code> for FoldLeft<P, R, F>
where
    P: Parser<'code>,
    R: Parser<'code>,
    F: Fn(P::Output, R::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (mut acc, mut cursor) = self.initial.parse(cursor)?;

        while let Ok((element, next)) = self.rest.parse(cursor) {
            acc = (self.op)(acc, element);
            cursor = next;
        }

        Ok((acc, cursor))
    }
}

impl<'code, P, R, F> PureParser<'code> for FoldLeft<P, R, F>
where
    P: PureParser<'code>,
    R: Parser<'code>,
    F: Fn(P::Output, R::Output) -> P::Output,
{
    fn parse_pure(&self, cursor: Cursor<'code>) -> PureResult<'code, Self::Output> {
        let (mut acc, mut cursor) = self.initial.parse_pure(cursor);

        while let Ok((element, next)) = self.rest.parse(cursor) {
            acc = (self.op)(acc, element);
            cursor = next;
        }

        (acc, cursor)
    }
}

/// Convenience function to create a FoldLeft parser
pub fn fold_left<'code, P, R, F>(initial: P, rest: R, op: F) -> FoldLeft<P, R, F>
where
    P: Parser<'code>,
    R: Parser<'code>,
    F: Fn(P::Output, R::Output) -> P::Output,
{
    FoldLeft::new(initial, rest, op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::i64;
    use crate::literal::literal;
    use crate::map::MapExt;
    use crate::then::ThenExt;

    #[test]
    fn test_fold_sums_plus_chain() {
        let parser = fold_left(i64(), literal("+").then(i64()), |acc, n| acc + n);

        let (value, cursor) = parser.parse(Cursor::from("1+2+3 rest")).unwrap();
        assert_eq!(value, 6);
        assert_eq!(cursor, " rest");
    }

    #[test]
    fn test_fold_left_associativity() {
        let parser = fold_left(i64(), literal("-").then(i64()), |acc, n| acc - n);

        // (10 - 4) - 3, not 10 - (4 - 3)
        let (value, _) = parser.parse(Cursor::from("10-4-3")).unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_fold_zero_rest_matches() {
        let parser = fold_left(i64(), literal("+").then(i64()), |acc, n| acc + n);

        let (value, cursor) = parser.parse(Cursor::from("5;")).unwrap();
        assert_eq!(value, 5);
        assert_eq!(cursor, ";");
    }

    #[test]
    fn test_fold_stops_before_failing_attempt() {
        let parser = fold_left(i64(), literal("+").then(i64()), |acc, n| acc + n);

        // the trailing "+x" attempt misses; its "+" must not be consumed
        let (value, cursor) = parser.parse(Cursor::from("1+2+x")).unwrap();
        assert_eq!(value, 3);
        assert_eq!(cursor, "+x");
    }

    #[test]
    fn test_fold_fails_only_when_initial_fails() {
        let parser = fold_left(i64(), literal("+").then(i64()), |acc, n| acc + n);

        let input = Cursor::from("+1+2");
        let miss = parser.parse(input).unwrap_err();
        assert_eq!(miss.cursor(), input);
    }

    #[test]
    fn test_fold_accumulates_in_order() {
        let parser = fold_left(
            i64().map(|n| vec![n]),
            literal(",").then(i64()),
            |mut acc, n| {
                acc.push(n);
                acc
            },
        );

        let (values, _) = parser.parse(Cursor::from("1,2,3")).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
