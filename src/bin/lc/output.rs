use crate::Integer;
use crate::err::LcErr;
use crate::pipe::Pipe;
use itertools::Itertools;
use lazychain::{Sequence, fold};
use op_help::OpHelp;
use std::io;
use std::io::Write;

/// `:fold`的折叠方式。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum FoldKind {
    Sum,
    Product,
    Max,
    Min,
}

impl FoldKind {
    pub(crate) fn parse(name: &str) -> Option<FoldKind> {
        match name {
            "sum" => Some(FoldKind::Sum),
            "product" => Some(FoldKind::Product),
            "max" => Some(FoldKind::Max),
            "min" => Some(FoldKind::Min),
            _ => None,
        }
    }

    /// 未指定初值时的初值，空流水线的结果即为此值。
    fn identity(self) -> Integer {
        match self {
            FoldKind::Sum => 0,
            FoldKind::Product => 1,
            FoldKind::Max => Integer::MIN,
            FoldKind::Min => Integer::MAX,
        }
    }

    fn into_fn(self) -> fn(Integer, Integer) -> Integer {
        match self {
            FoldKind::Sum => Integer::saturating_add,
            FoldKind::Product => Integer::saturating_mul,
            FoldKind::Max => Integer::max,
            FoldKind::Min => Integer::min,
        }
    }
}

#[derive(Debug, Eq, PartialEq, OpHelp)]
pub(crate) enum Output {
    /// :to         逐行输出到标准输出。
    ///             未指定输出时的默认输出。
    ///             :to out
    StdOut,
    /// :join       以分隔符连接所有值后输出为一行。
    ///             :join <sep>
    ///                 <sep>   分隔符，必选。
    ///             例如：
    ///                 :join ,
    Join { sep: String },
    /// :count      输出值的个数。
    Count,
    /// :fold       将所有值折叠为一个值后输出。
    ///             :fold <kind>[ <seed>]
    ///                 <kind>  折叠方式，必选，可选值：sum product max min
    ///                 <seed>  初值，可选，未指定时取折叠方式的单位元。
    ///             例如：
    ///                 :fold sum
    ///                 :fold max 0
    Fold { kind: FoldKind, seed: Option<Integer> },
}

impl Output {
    pub(crate) fn handle(self, pipe: Pipe) -> Result<(), LcErr> {
        self.write_to(&pipe, &mut io::stdout().lock())
    }

    fn write_to(self, pipe: &Pipe, out: &mut impl Write) -> Result<(), LcErr> {
        let res = match self {
            Output::StdOut => pipe.walk().try_for_each(|v| writeln!(out, "{v}")),
            Output::Join { sep } => writeln!(out, "{}", pipe.walk().join(&sep)),
            Output::Count => writeln!(out, "{}", pipe.walk().count()),
            Output::Fold { kind, seed } => {
                writeln!(out, "{}", fold(kind.into_fn(), pipe, seed.unwrap_or(kind.identity())))
            }
        };
        res.map_err(|err| LcErr::WriteStdoutErr(err.to_string()))
    }
}
