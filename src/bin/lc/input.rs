use crate::Integer;
use crate::err::LcErr;
use crate::pipe::Pipe;
use lazychain::sequence;
use op_help::OpHelp;
use std::io;
use std::io::BufRead;

#[derive(Debug, Eq, PartialEq, OpHelp)]
pub(crate) enum Input {
    /// :in         从标准输入读取整数，每行一个，忽略空行。
    ///             未指定输入时的默认输入。
    StdIn,
    /// :seq        生成等差数列作为输入。
    ///             :seq <start>[,<step>[,<count>]]
    ///                 <start> 起始值，必选。
    ///                 <step>  步长，可选，默认为1，可以为0或负数。
    ///                 <count> 个数，可选，未指定时无限生成。
    ///             例如：
    ///                 :seq 0          生成：0 1 2 3 4 ...
    ///                 :seq 0,2        生成：0 2 4 6 8 ...
    ///                 :seq 10,-3,4    生成：10 7 4 1
    Seq { start: Integer, step: Integer, count: Option<usize> },
    /// :of         使用直接字面值作为输入。
    ///             :of <value>
    ///             :of [ <value>[ <value>][...] ]
    ///                 <value> 整数，至少指定一个。
    ///             例如：
    ///                 :of 42
    ///                 :of [ 3 1 4 1 5 ]
    Of { values: Vec<Integer> },
}

impl Input {
    pub(crate) fn pipe(self) -> Result<Pipe, LcErr> {
        match self {
            Input::StdIn => read_integers(io::stdin().lock()).map(Pipe::Values),
            Input::Seq { start, step, count } => {
                let seq = sequence(start, step);
                Ok(Pipe::Seq(match count {
                    Some(count) => seq.bounded(count),
                    None => seq,
                }))
            }
            Input::Of { values } => Ok(Pipe::Values(values)),
        }
    }
}

/// 一次读完所有行，行号从1开始。
fn read_integers(reader: impl BufRead) -> Result<Vec<Integer>, LcErr> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|err| LcErr::ReadStdinErr { line_no, err: err.to_string() })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value = text.parse::<Integer>().map_err(|_| LcErr::NotAnInteger { line_no, line: text.to_owned() })?;
        values.push(value);
    }
    Ok(values)
}
