use crate::Integer;
use crate::pipe::{MapFn, MergeFn, PullFn, TestFn};
use lazychain::Feed;

/// `:map`的变换表达式。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum MapExpr {
    Add(Integer),
    Sub(Integer),
    Mul(Integer),
    /// 除数非零由解析保证。
    Div(Integer),
    Rem(Integer),
    Neg,
    Abs,
    Sq,
}

impl MapExpr {
    pub(crate) fn apply(self, v: Integer) -> Integer {
        match self {
            MapExpr::Add(n) => v.saturating_add(n),
            MapExpr::Sub(n) => v.saturating_sub(n),
            MapExpr::Mul(n) => v.saturating_mul(n),
            MapExpr::Div(n) => v.checked_div(n).unwrap_or(Integer::MAX),
            MapExpr::Rem(n) => v.checked_rem(n).unwrap_or(0),
            MapExpr::Neg => v.saturating_neg(),
            MapExpr::Abs => v.saturating_abs(),
            MapExpr::Sq => v.saturating_mul(v),
        }
    }

    pub(crate) fn into_fn(self) -> MapFn {
        Box::new(move |v: Integer| self.apply(v))
    }
}

/// `:filter`的判定条件。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Cond {
    Ge(Integer),
    Gt(Integer),
    Le(Integer),
    Lt(Integer),
    Eq(Integer),
    Ne(Integer),
    Even,
    Odd,
}

impl Cond {
    pub(crate) fn test(self, v: Integer) -> bool {
        match self {
            Cond::Ge(n) => v >= n,
            Cond::Gt(n) => v > n,
            Cond::Le(n) => v <= n,
            Cond::Lt(n) => v < n,
            Cond::Eq(n) => v == n,
            Cond::Ne(n) => v != n,
            Cond::Even => v % 2 == 0,
            Cond::Odd => v % 2 != 0,
        }
    }

    pub(crate) fn into_fn(self) -> TestFn {
        Box::new(move |v: &Integer| self.test(*v))
    }
}

/// `:chunk`对每组元素的聚合方式。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) enum Agg {
    #[default]
    Sum,
    Max,
    Min,
    Count,
    First,
    Last,
}

impl Agg {
    pub(crate) fn parse(name: &str) -> Option<Agg> {
        match name {
            "sum" => Some(Agg::Sum),
            "max" => Some(Agg::Max),
            "min" => Some(Agg::Min),
            "count" => Some(Agg::Count),
            "first" => Some(Agg::First),
            "last" => Some(Agg::Last),
            _ => None,
        }
    }

    /// 每次消耗至多`size`个元素并聚合；调用时上游至少还剩一个元素。
    pub(crate) fn into_chunk_fn(self, size: usize) -> PullFn {
        Box::new(move |feed: &mut dyn Feed<Item = Integer>| {
            let chunk = feed.take(size);
            match self {
                Agg::Sum => chunk.fold(0, Integer::saturating_add),
                Agg::Max => chunk.max().unwrap_or_default(),
                Agg::Min => chunk.min().unwrap_or_default(),
                Agg::Count => chunk.count() as Integer,
                Agg::First => chunk.reduce(|first, _| first).unwrap_or_default(),
                Agg::Last => chunk.last().unwrap_or_default(),
            }
        })
    }
}

/// 吞下一段连续相等的元素，返回元素值或段长。
pub(crate) fn run_fn(length: bool) -> PullFn {
    Box::new(move |feed: &mut dyn Feed<Item = Integer>| {
        let head = feed.advance().unwrap_or_default();
        let mut len = 1;
        while feed.peek() == Some(head) {
            feed.advance();
            len += 1;
        }
        if length { len } else { head }
    })
}

/// `:zip`合并两个值的方式。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Merge {
    Add,
    Sub,
    Mul,
    Max,
    Min,
}

impl Merge {
    pub(crate) fn parse(name: &str) -> Option<Merge> {
        match name {
            "+" => Some(Merge::Add),
            "-" => Some(Merge::Sub),
            "*" => Some(Merge::Mul),
            "max" => Some(Merge::Max),
            "min" => Some(Merge::Min),
            _ => None,
        }
    }

    pub(crate) fn into_fn(self) -> MergeFn {
        Box::new(move |(a, b): (Integer, Integer)| match self {
            Merge::Add => a.saturating_add(b),
            Merge::Sub => a.saturating_sub(b),
            Merge::Mul => a.saturating_mul(b),
            Merge::Max => a.max(b),
            Merge::Min => a.min(b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazychain::{Sequence, group};

    #[test]
    fn test_map_expr() {
        assert_eq!(MapExpr::Add(3).apply(4), 7);
        assert_eq!(MapExpr::Div(2).apply(-7), -3);
        assert_eq!(MapExpr::Rem(3).apply(7), 1);
        assert_eq!(MapExpr::Sq.apply(-5), 25);
        assert_eq!(MapExpr::Mul(2).apply(Integer::MAX), Integer::MAX);
        assert_eq!(MapExpr::Neg.into_fn()(9), -9);
    }

    #[test]
    fn test_cond() {
        assert!(Cond::Ge(3).test(3));
        assert!(!Cond::Gt(3).test(3));
        assert!(Cond::Odd.test(-3));
        assert!(Cond::Even.into_fn()(&-4));
    }

    #[test]
    fn test_chunk() {
        let values: Vec<Integer> = vec![3, 1, 4, 1, 5];
        let chunked = |agg: Agg| group(agg.into_chunk_fn(2), &values).materialize::<Vec<_>>();
        assert_eq!(chunked(Agg::Sum), vec![4, 5, 5]);
        assert_eq!(chunked(Agg::Max), vec![3, 4, 5]);
        assert_eq!(chunked(Agg::Min), vec![1, 1, 5]);
        assert_eq!(chunked(Agg::Count), vec![2, 2, 1]);
        assert_eq!(chunked(Agg::First), vec![3, 4, 5]);
        assert_eq!(chunked(Agg::Last), vec![1, 1, 5]);
    }

    #[test]
    fn test_runs() {
        let values: Vec<Integer> = vec![7, 7, 2, 9, 9, 9];
        assert_eq!(group(run_fn(false), &values).materialize::<Vec<_>>(), vec![7, 2, 9]);
        assert_eq!(group(run_fn(true), &values).materialize::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_merge() {
        assert_eq!(Merge::parse("-").map(|m| m.into_fn()((5, 7))), Some(-2));
        assert_eq!(Merge::parse("max").map(|m| m.into_fn()((5, 7))), Some(7));
        assert_eq!(Merge::parse("avg"), None);
    }
}
