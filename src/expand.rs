use crate::chain::Item;
use crate::cursor::{Cursor, Sequence};
use crate::err::Violation;
use crate::store::{Bind, Store, bind_by_value};
use std::ops::Deref;

/// 展开（一拆多）：每个上游元素经函数得到一个子序列，结果按顺序拍平一层。
///
/// 子序列可以是任何能解引用为切片的拥有型值，例如`Vec<T>`、`Box<[T]>`、`Rc<[T]>`。
/// 空的子序列被透明跳过。
#[derive(Debug, Clone)]
pub struct Expand<F, St> {
    f: F,
    store: St,
}

pub fn expand<B, F, R, O>(f: F, source: B) -> Expand<F, B::Store>
where
    B: Bind,
    F: Fn(Item<B>) -> R,
    R: Deref<Target = [O]> + Clone,
    O: Clone,
{
    Expand { f, store: source.bind() }
}

impl<F, St, R, O> Sequence for Expand<F, St>
where
    St: Store,
    F: Fn(<St::Seq as Sequence>::Item) -> R,
    R: Deref<Target = [O]> + Clone,
    O: Clone,
{
    type Item = O;
    type Cursor<'a>
        = ExpandCursor<'a, F, <St::Seq as Sequence>::Cursor<'a>, R>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        ExpandCursor::new(&self.f, seq.begin(), seq.end())
    }

    fn end(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        ExpandCursor::new(&self.f, seq.end(), seq.end())
    }
}

bind_by_value!([F, St] Expand<F, St>);

/// 展开游标。`pos`指向已暂存元素的下一个上游位置，`at`是暂存子序列内的下标。
#[derive(Debug)]
pub struct ExpandCursor<'a, F, C, R> {
    f: &'a F,
    pos: C,
    end: C,
    staged: Option<R>,
    at: usize,
}

impl<F, C, R, O> ExpandCursor<'_, F, C, R>
where
    R: Deref<Target = [O]>,
{
    fn remaining(&self) -> usize {
        self.staged.as_ref().map_or(0, |staged| staged.len() - self.at)
    }
}

impl<'a, F, C, R, O> ExpandCursor<'a, F, C, R>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
    R: Deref<Target = [O]>,
{
    fn new(f: &'a F, pos: C, end: C) -> Self {
        let mut cursor = ExpandCursor { f, pos, end, staged: None, at: 0 };
        cursor.settle();
        cursor
    }

    /// 暂存子序列用尽时，继续展开后续上游元素，直到得到非空子序列或上游耗尽。
    fn settle(&mut self) {
        while self.remaining() == 0 && self.pos != self.end {
            let staged = (self.f)(self.pos.get());
            self.pos.step();
            self.staged = Some(staged);
            self.at = 0;
        }
        if self.remaining() == 0 {
            self.staged = None;
            self.at = 0;
        }
    }
}

impl<F, C: Clone, R: Clone> Clone for ExpandCursor<'_, F, C, R> {
    fn clone(&self) -> Self {
        ExpandCursor {
            f: self.f,
            pos: self.pos.clone(),
            end: self.end.clone(),
            staged: self.staged.clone(),
            at: self.at,
        }
    }
}

impl<F, C, R, O> PartialEq for ExpandCursor<'_, F, C, R>
where
    C: PartialEq,
    R: Deref<Target = [O]>,
{
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining() && self.pos == other.pos
    }
}

impl<F, C, R, O> Cursor for ExpandCursor<'_, F, C, R>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
    R: Deref<Target = [O]> + Clone,
    O: Clone,
{
    type Item = O;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> O {
        match self.staged.as_deref().and_then(|staged| staged.get(self.at)) {
            Some(item) => item.clone(),
            None => Violation::DerefAtEnd("expand").raise(),
        }
    }

    fn step(&mut self) {
        if self.remaining() == 0 {
            Violation::StepAtEnd("expand").raise()
        }
        self.at += 1;
        self.settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability;
    use std::rc::Rc;

    fn marks(v: i32) -> Vec<char> {
        let mut out = Vec::new();
        for (mark, floor) in [('d', 1000), ('c', 100), ('b', 10), ('a', 0)] {
            if v > floor {
                out.push(mark);
            }
        }
        out
    }

    #[test]
    fn test_flatten() {
        let values = vec![1, 23, 456, 7890];
        let chain = expand(marks, &values);
        assert_eq!(chain.materialize::<String>(), "abacbadcba");
        assert!(!capability(&chain));
    }

    #[test]
    fn test_skip_empty() {
        let values = vec![0, -3, 2, 0, 0, 1, -1];
        let chain = expand(marks, values);
        assert_eq!(chain.materialize::<Vec<_>>(), vec!['a', 'a']);

        let nothing = expand(marks, [0, 0]);
        assert!(nothing.begin() == nothing.end());
    }

    #[test]
    fn test_shared_slices() {
        let words = ["ab", "", "c"];
        let chain = expand(|w: &str| Rc::<[char]>::from(w.chars().collect::<Vec<_>>()), &words);
        let mut it = chain.begin();
        let mut copy = it.clone();
        assert!(it == copy);
        it.step();
        assert!(it != copy);
        copy.step();
        assert!(it == copy);
        assert_eq!(chain.walk().collect::<String>(), "abc");
    }

    #[test]
    #[should_panic(expected = "[Step] Step past the end of a `expand` cursor")]
    fn test_step_at_end() {
        let values: Vec<i32> = Vec::new();
        expand(marks, &values).begin().step();
    }
}
