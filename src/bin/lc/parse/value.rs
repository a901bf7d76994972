use crate::Integer;
use crate::err::LcErr;
use crate::op::arith::{Cond, MapExpr};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, i64, usize};
use nom::combinator::{map, opt, value, verify};
use nom::error::Error;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// 用`parser`解析完整的参数值，解析失败或有剩余都视为错误。
pub(in crate::parse) fn parse_whole<'a, O, P>(
    cmd: &'static str, arg: &'static str, text: &'a str, mut parser: P,
) -> Result<O, LcErr>
where
    P: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    match parser.parse(text) {
        Ok(("", output)) => Ok(output),
        Ok((remaining, _)) => Err(LcErr::UnexpectedRemaining { cmd, arg, remaining: remaining.to_owned() }),
        Err(err) => Err(LcErr::ArgParseErr { cmd, arg, arg_value: text.to_owned(), error: err.to_string() }),
    }
}

pub(in crate::parse) fn integer(input: &str) -> IResult<&str, Integer> {
    i64.parse(input)
}

pub(in crate::parse) fn count(input: &str) -> IResult<&str, usize> {
    usize.parse(input)
}

/// `<start>[,<step>[,<count>]]`，步长缺省为1。
pub(in crate::parse) fn seq_range(input: &str) -> IResult<&str, (Integer, Integer, Option<usize>)> {
    map(
        (
            i64,                                                           // 起始值
            opt((preceded(char(','), i64), opt(preceded(char(','), usize)))), // 步长、个数
        ),
        |(start, rest)| match rest {
            Some((step, count)) => (start, step, count),
            None => (start, 1, None),
        },
    )
    .parse(input)
}

/// `+N -N *N /N %N neg abs sq`
pub(in crate::parse) fn map_expr(input: &str) -> IResult<&str, MapExpr> {
    alt((
        map(preceded(char('+'), i64), MapExpr::Add),
        map(preceded(char('-'), i64), MapExpr::Sub),
        map(preceded(char('*'), i64), MapExpr::Mul),
        map(verify(preceded(char('/'), i64), |n: &Integer| *n != 0), MapExpr::Div),
        map(verify(preceded(char('%'), i64), |n: &Integer| *n != 0), MapExpr::Rem),
        value(MapExpr::Neg, tag_no_case("neg")),
        value(MapExpr::Abs, tag_no_case("abs")),
        value(MapExpr::Sq, tag_no_case("sq")),
    ))
    .parse(input)
}

/// `>N >=N <N <=N =N !=N even odd`，双字符的比较符优先匹配。
pub(in crate::parse) fn cond(input: &str) -> IResult<&str, Cond> {
    alt((
        map(preceded(tag(">="), i64), Cond::Ge),
        map(preceded(tag("<="), i64), Cond::Le),
        map(preceded(tag("!="), i64), Cond::Ne),
        map(preceded(char('>'), i64), Cond::Gt),
        map(preceded(char('<'), i64), Cond::Lt),
        map(preceded(char('='), i64), Cond::Eq),
        value(Cond::Even, tag_no_case("even")),
        value(Cond::Odd, tag_no_case("odd")),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_range() {
        assert_eq!(seq_range("3"), Ok(("", (3, 1, None))));
        assert_eq!(seq_range("-3,2"), Ok(("", (-3, 2, None))));
        assert_eq!(seq_range("0,-5,4"), Ok(("", (0, -5, Some(4)))));
        assert_eq!(seq_range("0,1,x"), Ok((",x", (0, 1, None))));
        assert!(seq_range("a").is_err());
    }

    #[test]
    fn test_map_expr() {
        assert_eq!(map_expr("+10"), Ok(("", MapExpr::Add(10))));
        assert_eq!(map_expr("--1"), Ok(("", MapExpr::Sub(-1))));
        assert_eq!(map_expr("%7"), Ok(("", MapExpr::Rem(7))));
        assert_eq!(map_expr("SQ"), Ok(("", MapExpr::Sq)));
        assert!(map_expr("/0").is_err());
        assert!(map_expr("^2").is_err());
    }

    #[test]
    fn test_cond() {
        assert_eq!(cond(">=5"), Ok(("", Cond::Ge(5))));
        assert_eq!(cond(">5"), Ok(("", Cond::Gt(5))));
        assert_eq!(cond("!=-1"), Ok(("", Cond::Ne(-1))));
        assert_eq!(cond("odd"), Ok(("", Cond::Odd)));
        assert!(cond("=>1").is_err());
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole(":map", "expr", "*3", map_expr), Ok(MapExpr::Mul(3)));
        assert_eq!(
            parse_whole(":seq", "range", "1,2,3,4", seq_range),
            Err(LcErr::UnexpectedRemaining { cmd: ":seq", arg: "range", remaining: ",4".to_string() })
        );
        assert!(matches!(parse_whole(":of", "value", "x1", integer), Err(LcErr::ArgParseErr { .. })));
    }
}
