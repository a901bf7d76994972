use crate::chain::Item;
use crate::cursor::{Cursor, Sequence};
use crate::err::Violation;
use crate::store::{Bind, Store, bind_by_value};

/// 惰性跳过不满足谓词的元素。
///
/// 步长取决于数据，因此过滤后的链永远只能顺序访问。
#[derive(Debug, Clone)]
pub struct Filter<P, St> {
    p: P,
    store: St,
}

pub fn filter<B, P>(p: P, source: B) -> Filter<P, B::Store>
where
    B: Bind,
    P: Fn(&Item<B>) -> bool,
{
    Filter { p, store: source.bind() }
}

impl<P, St> Sequence for Filter<P, St>
where
    St: Store,
    P: Fn(&<St::Seq as Sequence>::Item) -> bool,
{
    type Item = <St::Seq as Sequence>::Item;
    type Cursor<'a>
        = FilterCursor<'a, P, <St::Seq as Sequence>::Cursor<'a>>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        FilterCursor::new(&self.p, seq.begin(), seq.end())
    }

    fn end(&self) -> Self::Cursor<'_> {
        let seq = self.store.seq();
        FilterCursor::new(&self.p, seq.end(), seq.end())
    }
}

bind_by_value!([P, St] Filter<P, St>);

#[derive(Debug)]
pub struct FilterCursor<'a, P, C> {
    p: &'a P,
    pos: C,
    end: C,
    finished: bool,
}

impl<'a, P, C> FilterCursor<'a, P, C>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// 构造时即前移到第一个满足谓词的位置。
    fn new(p: &'a P, pos: C, end: C) -> Self {
        let mut cursor = FilterCursor { p, pos, end, finished: false };
        cursor.seek();
        cursor
    }

    fn seek(&mut self) {
        while self.pos != self.end && !(self.p)(&self.pos.get()) {
            self.pos.step();
        }
        self.finished = self.pos == self.end;
    }
}

impl<P, C: Clone> Clone for FilterCursor<'_, P, C> {
    fn clone(&self) -> Self {
        FilterCursor { p: self.p, pos: self.pos.clone(), end: self.end.clone(), finished: self.finished }
    }
}

impl<P, C: PartialEq> PartialEq for FilterCursor<'_, P, C> {
    fn eq(&self, other: &Self) -> bool {
        (self.finished && other.finished) || self.pos == other.pos
    }
}

impl<P, C> Cursor for FilterCursor<'_, P, C>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> C::Item {
        if self.finished {
            Violation::DerefAtEnd("filter").raise()
        }
        self.pos.get()
    }

    fn step(&mut self) {
        if self.finished {
            Violation::StepAtEnd("filter").raise()
        }
        self.pos.step();
        self.seek();
    }
}
