use crate::err::LcErr;
use crate::op::Op;
use crate::op::arith::{Agg, Merge};
use crate::parse::args::consume_if_some;
use crate::parse::args::input::parse_explicit_input;
use crate::parse::value::{cond, count, map_expr, parse_whole};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, LcErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, LcErr> {
    let op = match args.peek().map(String::as_str) {
        Some(":map") => parse_map(args)?,
        Some(":filter") => parse_filter(args)?,
        Some(":chunk") => parse_chunk(args)?,
        Some(":dedup") => parse_flag(args, Op::Dedup),
        Some(":runs") => parse_flag(args, Op::Runs),
        Some(":digits") => parse_flag(args, Op::Digits),
        Some(":dup") => parse_dup(args)?,
        Some(":upto") => parse_flag(args, Op::Upto),
        Some(":zip") => parse_zip(args)?,
        _ => return Ok(None),
    };
    Ok(Some(op))
}

fn parse_flag(args: &mut Peekable<impl Iterator<Item = String>>, op: Op) -> Op {
    args.next();
    op
}

fn parse_map(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LcErr> {
    args.next(); // 消耗`:map`
    let expr = args.next().ok_or(LcErr::MissingArg { cmd: ":map", arg: "expr" })?;
    Ok(Op::Map(parse_whole(":map", "expr", &expr, map_expr)?))
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LcErr> {
    args.next(); // 消耗`:filter`
    let text = args.next().ok_or(LcErr::MissingArg { cmd: ":filter", arg: "cond" })?;
    Ok(Op::Filter(parse_whole(":filter", "cond", &text, cond)?))
}

fn parse_chunk(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LcErr> {
    args.next(); // 消耗`:chunk`
    let text = args.next().ok_or(LcErr::MissingArg { cmd: ":chunk", arg: "size" })?;
    let size = parse_whole(":chunk", "size", &text, count)?;
    if size == 0 {
        return Err(LcErr::InvalidArg { cmd: ":chunk", arg: "size", arg_value: text, reason: "must be positive" });
    }
    let agg = consume_if_some(args, |s| Agg::parse(s)).unwrap_or_default();
    Ok(Op::Chunk { size, agg })
}

fn parse_dup(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LcErr> {
    args.next(); // 消耗`:dup`
    let text = args.next().ok_or(LcErr::MissingArg { cmd: ":dup", arg: "times" })?;
    Ok(Op::Dup { times: parse_whole(":dup", "times", &text, count)? })
}

fn parse_zip(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Op, LcErr> {
    args.next(); // 消耗`:zip`
    let text = args.next().ok_or(LcErr::MissingArg { cmd: ":zip", arg: "merge" })?;
    let merge = Merge::parse(&text).ok_or(LcErr::InvalidArg {
        cmd: ":zip",
        arg: "merge",
        arg_value: text.clone(),
        reason: "expected one of `+`, `-`, `*`, `max`, `min`",
    })?;
    let input = parse_explicit_input(args)?.ok_or(LcErr::MissingArg { cmd: ":zip", arg: "input" })?;
    Ok(Op::Zip { merge, input })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;
    use crate::op::arith::{Cond, MapExpr};
    use crate::parse::args::build_args;

    #[test]
    fn test_non_match() {
        let mut args = build_args("");
        assert_eq!(Ok(None), parse_op(&mut args));
        assert_eq!(Some("".to_string()), args.next());

        let mut args = build_args(":count");
        assert_eq!(Ok(vec![]), parse_ops(&mut args));
        assert_eq!(Some(":count".to_string()), args.next());
    }

    #[test]
    fn test_parse_map() {
        let mut args = build_args(":map *3");
        assert_eq!(Ok(Some(Op::Map(MapExpr::Mul(3)))), parse_op(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args(":map");
        assert_eq!(Err(LcErr::MissingArg { cmd: ":map", arg: "expr" }), parse_op(&mut args));

        let mut args = build_args(":map /0");
        assert!(matches!(parse_op(&mut args), Err(LcErr::ArgParseErr { cmd: ":map", .. })));
    }

    #[test]
    fn test_parse_filter() {
        let mut args = build_args(":filter <=10");
        assert_eq!(Ok(Some(Op::Filter(Cond::Le(10)))), parse_op(&mut args));

        let mut args = build_args(":filter >1x");
        assert_eq!(
            Err(LcErr::UnexpectedRemaining { cmd: ":filter", arg: "cond", remaining: "x".to_string() }),
            parse_op(&mut args)
        );
    }

    #[test]
    fn test_parse_chunk() {
        let mut args = build_args(":chunk 3");
        assert_eq!(Ok(Some(Op::Chunk { size: 3, agg: Agg::Sum })), parse_op(&mut args));

        let mut args = build_args(":chunk 2 max :count");
        assert_eq!(Ok(Some(Op::Chunk { size: 2, agg: Agg::Max })), parse_op(&mut args));
        assert_eq!(Some(":count".to_string()), args.next());

        let mut args = build_args(":chunk 0");
        assert_eq!(
            Err(LcErr::InvalidArg { cmd: ":chunk", arg: "size", arg_value: "0".to_string(), reason: "must be positive" }),
            parse_op(&mut args)
        );

        let mut args = build_args(":chunk");
        assert_eq!(Err(LcErr::MissingArg { cmd: ":chunk", arg: "size" }), parse_op(&mut args));
    }

    #[test]
    fn test_parse_flags() {
        let mut args = build_args(":dedup :runs :digits :upto");
        assert_eq!(Ok(vec![Op::Dedup, Op::Runs, Op::Digits, Op::Upto]), parse_ops(&mut args));
        assert!(args.next().is_none());
    }

    #[test]
    fn test_parse_dup() {
        let mut args = build_args(":dup 0");
        assert_eq!(Ok(Some(Op::Dup { times: 0 })), parse_op(&mut args));

        let mut args = build_args(":dup -1");
        assert!(matches!(parse_op(&mut args), Err(LcErr::ArgParseErr { cmd: ":dup", arg: "times", .. })));
    }

    #[test]
    fn test_parse_zip() {
        let mut args = build_args(":zip + :seq 100,100");
        assert_eq!(
            Ok(Some(Op::Zip { merge: Merge::Add, input: Input::Seq { start: 100, step: 100, count: None } })),
            parse_op(&mut args)
        );
        assert!(args.next().is_none());

        let mut args = build_args(":zip max :of [ 1 2 ] :map neg");
        assert_eq!(
            Ok(vec![
                Op::Zip { merge: Merge::Max, input: Input::Of { values: vec![1, 2] } },
                Op::Map(MapExpr::Neg)
            ]),
            parse_ops(&mut args)
        );

        let mut args = build_args(":zip avg :in");
        assert!(matches!(parse_op(&mut args), Err(LcErr::InvalidArg { cmd: ":zip", arg: "merge", .. })));

        let mut args = build_args(":zip -");
        assert_eq!(Err(LcErr::MissingArg { cmd: ":zip", arg: "input" }), parse_op(&mut args));
    }
}
