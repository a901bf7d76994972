pub(crate) mod arith;

use crate::Integer;
use crate::err::LcErr;
use crate::input::Input;
use crate::pipe::Pipe;
use arith::{Agg, Cond, MapExpr, Merge, run_fn};
use op_help::OpHelp;

#[derive(Debug, Eq, PartialEq, OpHelp)]
pub(crate) enum Op {
    /* **************************************** 转换 **************************************** */
    /// :map        对每个值做算术变换，溢出时取边界值。
    ///             :map <expr>
    ///                 <expr>  变换表达式，必选，可选值：
    ///                         +N -N *N /N %N  与N做运算，N不能为0（/、%）
    ///                         neg abs sq      取反、取绝对值、平方
    ///             例如：
    ///                 :map +10
    ///                 :map %7
    ///                 :map sq
    Map(MapExpr),
    /// :zip        与另一个输入逐个配对并合并为一个值，任一输入结束即结束。
    ///             :zip <merge> <input>
    ///                 <merge> 合并方式，必选，可选值：+ - * max min
    ///                 <input> 另一个输入，必选，同`:seq`、`:of`、`:in`。
    ///             例如：
    ///                 :zip + :seq 100,100
    ///                 :zip max :of [ 3 1 4 ]
    Zip { merge: Merge, input: Input },
    /* **************************************** 减少 **************************************** */
    /// :filter     只保留满足条件的值。
    ///             :filter <cond>
    ///                 <cond>  条件，必选，可选值：
    ///                         >N >=N <N <=N =N !=N
    ///                         even odd
    ///             例如：
    ///                 :filter >=0
    ///                 :filter odd
    Filter(Cond),
    /// :chunk      每<size>个值聚合为一个值，最后一组可以不满。
    ///             :chunk <size>[ <agg>]
    ///                 <size>  每组个数，必须为正数。
    ///                 <agg>   聚合方式，可选，默认为sum，可选值：
    ///                         sum max min count first last
    ///             例如：
    ///                 :chunk 3
    ///                 :chunk 2 max
    Chunk { size: usize, agg: Agg },
    /// :dedup      连续相等的值只保留一个。
    Dedup,
    /// :runs       连续相等的值替换为其个数。
    ///             例如：
    ///                 :of [ 7 7 2 9 9 9 ] :runs   输出：2 1 3
    Runs,
    /* **************************************** 增加 **************************************** */
    /// :digits     展开为十进制各位数字，负数按绝对值处理。
    ///             例如：
    ///                 :of [ 120 -7 ] :digits      输出：1 2 0 7
    Digits,
    /// :dup        每个值重复<times>次，为0时丢弃所有值。
    ///             :dup <times>
    ///             例如：
    ///                 :dup 2
    Dup { times: usize },
    /// :upto       每个值N展开为0到N-1，N不大于0时不产生值。
    ///             例如：
    ///                 :of [ 3 0 2 ] :upto         输出：0 1 2 0 1
    Upto,
}

impl Op {
    /// 在流水线末端套上当前操作。
    pub(crate) fn wrap(self, pipe: Pipe) -> Result<Pipe, LcErr> {
        Ok(match self {
            Op::Map(expr) => pipe.map(expr.into_fn()),
            Op::Zip { merge, input } => pipe.zip(input.pipe()?, merge.into_fn()),
            Op::Filter(cond) => pipe.filter(cond.into_fn()),
            Op::Chunk { size, agg } => pipe.group(agg.into_chunk_fn(size)),
            Op::Dedup => pipe.group(run_fn(false)),
            Op::Runs => pipe.group(run_fn(true)),
            Op::Digits => pipe.expand(Box::new(digits)),
            Op::Dup { times } => pipe.expand(Box::new(move |v: Integer| vec![v; times])),
            Op::Upto => pipe.expand(Box::new(|v: Integer| (0..v.max(0)).collect())),
        })
    }
}

fn digits(v: Integer) -> Vec<Integer> {
    v.unsigned_abs().to_string().bytes().map(|b| Integer::from(b - b'0')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazychain::Sequence;

    fn run(values: Vec<Integer>, ops: Vec<Op>) -> Vec<Integer> {
        let mut pipe = Pipe::Values(values);
        for op in ops {
            pipe = op.wrap(pipe).unwrap();
        }
        pipe.materialize()
    }

    #[test]
    fn test_transform_ops() {
        assert_eq!(run(vec![1, 2, 3], vec![Op::Map(MapExpr::Mul(2)), Op::Map(MapExpr::Add(1))]), vec![3, 5, 7]);
        assert_eq!(
            run(vec![1, 2, 3], vec![Op::Zip { merge: Merge::Sub, input: Input::Of { values: vec![10, 20] } }]),
            vec![-9, -18]
        );
    }

    #[test]
    fn test_reduce_ops() {
        assert_eq!(run(vec![5, -2, 8, 0], vec![Op::Filter(Cond::Gt(0))]), vec![5, 8]);
        assert_eq!(run(vec![1, 2, 3, 4, 5], vec![Op::Chunk { size: 2, agg: Agg::Sum }]), vec![3, 7, 5]);
        assert_eq!(run(vec![4, 4, 1, 4, 4, 4], vec![Op::Dedup]), vec![4, 1, 4]);
        assert_eq!(run(vec![4, 4, 1, 4, 4, 4], vec![Op::Runs]), vec![2, 1, 3]);
    }

    #[test]
    fn test_expand_ops() {
        assert_eq!(run(vec![120, -7], vec![Op::Digits]), vec![1, 2, 0, 7]);
        assert_eq!(run(vec![1, 2], vec![Op::Dup { times: 2 }]), vec![1, 1, 2, 2]);
        assert_eq!(run(vec![1, 2], vec![Op::Dup { times: 0 }]), Vec::<Integer>::new());
        assert_eq!(run(vec![3, 0, -1, 2], vec![Op::Upto]), vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_help() {
        assert!(Op::Dedup.help().starts_with(":dedup"));
        let commands = Op::all_help().iter().map(|(cmd, _)| *cmd).collect::<Vec<_>>();
        assert_eq!(
            commands,
            vec![":map", ":zip", ":filter", ":chunk", ":dedup", ":runs", ":digits", ":dup", ":upto"]
        );
    }
}
