use crate::config::Config;
use crate::err::LcErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;

mod config;
mod err;
mod input;
mod op;
mod output;
mod parse;
mod pipe;
mod print;

pub(crate) type Integer = i64;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), LcErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help(args.next().as_deref());
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("lc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    let verbose = configs.contains(&Config::Verbose);
    if verbose {
        println_info!("Input:");
        println!("    {:?}", input);
        println_notice!("        {}", summary(input.help()));
        println_info!("Op:");
        for op in &ops {
            println!("    {:?}", op);
            println_notice!("        {}", summary(op.help()));
        }
        println_info!("Output:");
        println!("    {:?}", output);
        println_notice!("        {}", summary(output.help()));
    }
    let mut pipe = input.pipe()?;
    for op in ops {
        pipe = op.wrap(pipe)?;
    }
    if verbose {
        println_notice!("Random access: {}", pipe.capability());
    }
    if !configs.contains(&Config::DryRun) { output.handle(pipe) } else { Ok(()) }
}

/// 帮助首行去掉命令名后的说明。
fn summary(help: &str) -> &str {
    let first = help.lines().next().unwrap_or_default();
    first.split_once(char::is_whitespace).map(|(_, rest)| rest.trim_start()).unwrap_or(first)
}

/// 打印全部帮助，或只打印`topic`命令的帮助。
fn print_help(topic: Option<&str>) {
    let sections = [("Input:", Input::all_help()), ("Op:", Op::all_help()), ("Output:", Output::all_help())];
    if let Some(topic) = topic {
        for (cmd, help) in sections.iter().flat_map(|(_, entries)| entries.iter()) {
            if *cmd == topic {
                println!("{help}");
                return;
            }
        }
        println_err!("Unknown command `{topic}`");
        return;
    }
    println_info!("Usage: lc [-h [<cmd>]] [-V] [-v] [-d] [<input>] [<op>][...] [<output>]");
    for (title, entries) in sections {
        println_info!("{title}");
        for (_, help) in entries {
            for line in help.lines() {
                println!("    {line}");
            }
        }
    }
}
