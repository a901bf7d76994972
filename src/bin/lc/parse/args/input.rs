use crate::err::LcErr;
use crate::input::Input;
use crate::parse::args::parse_arg_or_arg1;
use crate::parse::value::{integer, parse_whole, seq_range};
use std::iter::Peekable;

/// 流水线的源头，缺省时从标准输入读取。
pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LcErr> {
    Ok(parse_explicit_input(args)?.unwrap_or(Input::StdIn))
}

/// 显式给出的输入命令，`:zip`的第二个上游也由此解析。
pub(in crate::parse::args) fn parse_explicit_input(
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> Result<Option<Input>, LcErr> {
    match args.peek().map(String::as_str) {
        Some(":seq") => parse_seq(args).map(Some),
        Some(":of") => parse_of(args).map(Some),
        Some(":in") => {
            args.next();
            Ok(Some(Input::StdIn))
        }
        _ => Ok(None),
    }
}

fn parse_seq(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LcErr> {
    args.next(); // 消耗`:seq`
    let range = args.next().ok_or(LcErr::MissingArg { cmd: ":seq", arg: "range" })?;
    let (start, step, count) = parse_whole(":seq", "range", &range, seq_range)?;
    Ok(Input::Seq { start, step, count })
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, LcErr> {
    args.next(); // 消耗`:of`
    let values = parse_arg_or_arg1(args, ":of", "value")?
        .iter()
        .map(|value| parse_whole(":of", "value", value, integer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Input::Of { values })
}
