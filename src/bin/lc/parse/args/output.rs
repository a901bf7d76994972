use crate::err::LcErr;
use crate::output::{FoldKind, Output};
use crate::parse::args::{consume_if_some, escaped};
use crate::parse::value::{integer, parse_whole};
use std::iter::Peekable;

/// 流水线的终点，缺省时逐行输出到标准输出。
pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LcErr> {
    match args.peek().map(String::as_str) {
        Some(":to") => parse_to(args),
        Some(":join") => parse_join(args),
        Some(":count") => {
            args.next();
            Ok(Output::Count)
        }
        Some(":fold") => parse_fold(args),
        _ => Ok(Output::StdOut),
    }
}

fn parse_to(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LcErr> {
    args.next(); // 消耗`:to`
    match args.next() {
        Some(target) if target.eq_ignore_ascii_case("out") => Ok(Output::StdOut),
        Some(target) => Err(LcErr::InvalidArg {
            cmd: ":to",
            arg: "target",
            arg_value: target,
            reason: "only `out` is supported",
        }),
        None => Err(LcErr::MissingArg { cmd: ":to", arg: "target" }),
    }
}

fn parse_join(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LcErr> {
    args.next(); // 消耗`:join`
    let sep = args.next().ok_or(LcErr::MissingArg { cmd: ":join", arg: "sep" })?;
    Ok(Output::Join { sep: escaped(sep) })
}

fn parse_fold(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, LcErr> {
    args.next(); // 消耗`:fold`
    let name = args.next().ok_or(LcErr::MissingArg { cmd: ":fold", arg: "kind" })?;
    let kind = FoldKind::parse(&name).ok_or(LcErr::InvalidArg {
        cmd: ":fold",
        arg: "kind",
        arg_value: name.clone(),
        reason: "expected one of `sum`, `product`, `max`, `min`",
    })?;
    let seed = consume_if_some(args, |s| parse_whole(":fold", "seed", s, integer).ok());
    Ok(Output::Fold { kind, seed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_default() {
        let mut args = build_args("");
        assert_eq!(Ok(Output::StdOut), parse_output(&mut args));
        assert_eq!(Some("".to_string()), args.next());
    }

    #[test]
    fn test_parse_to() {
        let mut args = build_args(":to out");
        assert_eq!(Ok(Output::StdOut), parse_output(&mut args));
        assert!(args.next().is_none());

        let mut args = build_args(":to file");
        assert!(matches!(parse_output(&mut args), Err(LcErr::InvalidArg { cmd: ":to", .. })));

        let mut args = build_args(":to");
        assert_eq!(Err(LcErr::MissingArg { cmd: ":to", arg: "target" }), parse_output(&mut args));
    }

    #[test]
    fn test_parse_join() {
        let mut args = build_args(":join ,");
        assert_eq!(Ok(Output::Join { sep: ",".to_string() }), parse_output(&mut args));

        let mut args = build_args(":join \\[");
        assert_eq!(Ok(Output::Join { sep: "[".to_string() }), parse_output(&mut args));
    }

    #[test]
    fn test_parse_count() {
        let mut args = build_args(":count");
        assert_eq!(Ok(Output::Count), parse_output(&mut args));
        assert!(args.next().is_none());
    }

    #[test]
    fn test_parse_fold() {
        let mut args = build_args(":fold product");
        assert_eq!(Ok(Output::Fold { kind: FoldKind::Product, seed: None }), parse_output(&mut args));

        let mut args = build_args(":fold max -100 tail");
        assert_eq!(Ok(Output::Fold { kind: FoldKind::Max, seed: Some(-100) }), parse_output(&mut args));
        assert_eq!(Some("tail".to_string()), args.next());

        let mut args = build_args(":fold avg");
        assert!(matches!(parse_output(&mut args), Err(LcErr::InvalidArg { cmd: ":fold", arg: "kind", .. })));
    }
}
