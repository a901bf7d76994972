use crate::err::LcErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use std::iter::Peekable;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), LcErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(LcErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

/// 单个值，或由`[`和`]`包围的多个值。
fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, LcErr> {
    match args.next() {
        Some(value) => {
            if value == "[" {
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        return if values.is_empty() { Err(LcErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    }
                    values.push(escaped(value));
                }
                Err(LcErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                Err(LcErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![escaped(value)])
            }
        }
        None => Err(LcErr::MissingArg { cmd, arg }),
    }
}

fn escaped(arg: String) -> String {
    if arg == "\\[" || arg == "\\]" { arg[1..].to_string() } else { arg }
}

fn consume_if_some<M, U>(args: &mut Peekable<impl Iterator<Item = String>>, m: M) -> Option<U>
where
    M: FnOnce(&String) -> Option<U>,
{
    let option = m(args.peek()?);
    if option.is_some() {
        args.next();
    }
    option
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').map(String::from).peekable()
}
