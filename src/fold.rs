use crate::chain::Item;
use crate::cursor::{Cursor, Sequence};
use crate::store::{Bind, Store};

/// 从头到尾单趟消费整个序列，`acc = f(acc, item)`，空序列直接返回`seed`。
pub fn fold<B, A, F>(f: F, source: B, seed: A) -> A
where
    B: Bind,
    F: FnMut(A, Item<B>) -> A,
{
    let store = source.bind();
    let seq = store.seq();
    fold_range(f, seq.begin(), &seq.end(), seed)
}

/// 从游标的当前位置折叠到`end`，用于已经前进过的游标。
pub fn fold_range<C, A, F>(mut f: F, mut pos: C, end: &C, seed: A) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    let mut acc = seed;
    while pos != *end {
        acc = f(acc, pos.get());
        pos.step();
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::generator::sequence;

    #[test]
    fn test_fold() {
        let values = vec![1, 2, 3, 4];
        assert_eq!(fold(|acc, v| acc + v, &values, 0), 10);
        assert_eq!(fold(|acc: String, c| format!("{c}{acc}"), "abc", String::new()), "cba");
        assert_eq!(fold(|acc, v| acc * v, sequence(1u64, 1).bounded(5), 1), 120);
    }

    #[test]
    fn test_seed_on_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(fold(|acc, v| acc + v, &empty, 42), 42);
        assert_eq!(fold(|acc, v| acc + v, filter(|v: &i32| *v > 9, vec![1, 2]), -1), -1);
    }

    #[test]
    fn test_fold_range() {
        let values = [3, 4, 5];
        let mut pos = values.begin();
        pos.step();
        assert_eq!(fold_range(|acc, v| acc + v, pos, &values.end(), 0), 9);
    }
}
