use crate::chain::Item;
use crate::cursor::{Cursor, Sequence};
use crate::err::Violation;
use crate::store::{Bind, Store, bind_by_value};

/// 分组消费者看到的上游视图：当前位置与上游末尾之间的元素。
///
/// `dyn Feed`同时是一个`Iterator`，消费者可以直接`feed.take(n).sum()`。
pub trait Feed {
    type Item;

    /// 读取当前元素但不前进。
    fn peek(&self) -> Option<Self::Item>;

    /// 读取当前元素并前进一步。
    fn advance(&mut self) -> Option<Self::Item>;

    /// 最多跳过`n`个元素，返回实际跳过的个数。
    fn discard(&mut self, n: usize) -> usize;

    fn is_drained(&self) -> bool;
}

impl<I> Iterator for dyn Feed<Item = I> + '_ {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        self.advance()
    }
}

/// 以可变借用的方式暴露上游游标，消费者对它的推进会直接反映到分组游标上。
pub struct Reader<'r, C> {
    pos: &'r mut C,
    end: &'r C,
}

impl<'r, C: Cursor> Reader<'r, C> {
    pub fn new(pos: &'r mut C, end: &'r C) -> Self {
        Reader { pos, end }
    }
}

impl<C: Cursor> Feed for Reader<'_, C> {
    type Item = C::Item;

    fn peek(&self) -> Option<C::Item> {
        if self.is_drained() { None } else { Some(self.pos.get()) }
    }

    fn advance(&mut self) -> Option<C::Item> {
        if self.is_drained() {
            return None;
        }
        let item = self.pos.get();
        self.pos.step();
        Some(item)
    }

    fn discard(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && !self.is_drained() {
            self.pos.step();
            skipped += 1;
        }
        skipped
    }

    fn is_drained(&self) -> bool {
        *self.pos == *self.end
    }
}

/// 分组（多合一）：每一步调用一次消费者，由它决定吞下多少个上游元素，产出一个聚合值。
///
/// 消费者每次至少要消费一个元素，否则以[`Violation::NoProgress`]失败。
#[derive(Debug, Clone)]
pub struct Group<F, St> {
    f: F,
    store: St,
}

pub fn group<B, F, T>(f: F, source: B) -> Group<F, B::Store>
where
    B: Bind,
    F: Fn(&mut dyn Feed<Item = Item<B>>) -> T,
    T: Clone,
{
    Group { f, store: source.bind() }
}

impl<F, St, T> Sequence for Group<F, St>
where
    St: Store,
    F: Fn(&mut dyn Feed<Item = <St::Seq as Sequence>::Item>) -> T,
    T: Clone,
{
    type Item = T;
    type Cursor<'a>
        = GroupCursor<'a, F, <St::Seq as Sequence>::Cursor<'a>, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        GroupCursor::new(&self.f, seq.begin(), seq.end())
    }

    fn end(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        GroupCursor::new(&self.f, seq.end(), seq.end())
    }
}

bind_by_value!([F, St] Group<F, St>);

/// 分组游标。
///
/// 上游耗尽后仍缓存着最后一个输出时`pre_end`为真，再前进一步才真正到达末尾。
#[derive(Debug)]
pub struct GroupCursor<'a, F, C, T> {
    f: &'a F,
    pos: C,
    end: C,
    value: Option<T>,
    pre_end: bool,
}

impl<'a, F, C, T> GroupCursor<'a, F, C, T>
where
    C: Cursor,
    F: Fn(&mut dyn Feed<Item = C::Item>) -> T,
{
    fn new(f: &'a F, pos: C, end: C) -> Self {
        let mut cursor = GroupCursor { f, pos, end, value: None, pre_end: false };
        if cursor.pos != cursor.end {
            cursor.pull();
        }
        cursor
    }

    fn pull(&mut self) {
        let before = self.pos.clone();
        let mut reader = Reader::new(&mut self.pos, &self.end);
        let value = (self.f)(&mut reader);
        if self.pos == before {
            Violation::NoProgress.raise()
        }
        self.value = Some(value);
        self.pre_end = self.pos == self.end;
    }

    fn at_end(&self) -> bool {
        !self.pre_end && self.pos == self.end
    }
}

impl<F, C: Clone, T: Clone> Clone for GroupCursor<'_, F, C, T> {
    fn clone(&self) -> Self {
        GroupCursor {
            f: self.f,
            pos: self.pos.clone(),
            end: self.end.clone(),
            value: self.value.clone(),
            pre_end: self.pre_end,
        }
    }
}

impl<F, C: PartialEq, T> PartialEq for GroupCursor<'_, F, C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.pre_end == other.pre_end
    }
}

impl<F, C, T> Cursor for GroupCursor<'_, F, C, T>
where
    C: Cursor,
    F: Fn(&mut dyn Feed<Item = C::Item>) -> T,
    T: Clone,
{
    type Item = T;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> T {
        match &self.value {
            Some(value) if !self.at_end() => value.clone(),
            _ => Violation::DerefAtEnd("group").raise(),
        }
    }

    fn step(&mut self) {
        if self.at_end() {
            Violation::StepAtEnd("group").raise()
        }
        if self.pre_end {
            self.pre_end = false;
            self.value = None;
        } else {
            self.pull();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability;

    #[test]
    fn test_pairs() {
        let values = vec![1, 2, 3];
        let pairs = group(|feed| feed.take(2).sum::<i32>(), &values);
        assert_eq!(pairs.materialize::<Vec<_>>(), vec![3, 3]);
        assert!(!capability(&pairs));
        assert_eq!(group(|feed| feed.take(2).count(), Vec::<i32>::new()).walk().count(), 0);
    }

    #[test]
    fn test_pre_end() {
        let values = [4, 5];
        let whole = group(|feed| feed.count(), &values);
        let mut it = whole.begin();
        assert!(it != whole.end());
        assert_eq!(it.get(), 2);
        it.step();
        assert!(it == whole.end());
    }

    #[test]
    fn test_runs() {
        let text = "aaabccdd";
        let runs = group(
            |feed| {
                let head = feed.peek();
                let mut len = 0;
                while feed.peek() == head {
                    feed.advance();
                    len += 1;
                }
                (head, len)
            },
            text,
        );
        let expected = vec![(Some('a'), 3), (Some('b'), 1), (Some('c'), 2), (Some('d'), 2)];
        assert_eq!(runs.materialize::<Vec<_>>(), expected);
    }

    #[test]
    fn test_discard() {
        let values = vec![1, 2, 3, 4, 5];
        let heads = group(
            |feed| {
                let head = feed.advance();
                feed.discard(10);
                assert!(feed.is_drained());
                head
            },
            &values,
        );
        assert_eq!(heads.materialize::<Vec<_>>(), vec![Some(1)]);
    }

    #[test]
    #[should_panic(expected = "[Group] Consumer returned without consuming any element")]
    fn test_no_progress() {
        let values = vec![1];
        group(|feed| feed.peek(), &values).begin();
    }
}
