use crate::chain::Item;
use crate::cursor::{Cursor, RandomAccess, Sequence, jump_ops};
use crate::store::{Bind, Store, bind_by_value};

/// 对上游每个元素惰性应用一元函数。
///
/// 能力标记与上游一致：上游支持随机访问时，变换后的链同样支持。
#[derive(Debug, Clone)]
pub struct Transform<F, St> {
    f: F,
    store: St,
}

/// 构造变换链，`source`为引用时借用，为值时持有。
pub fn transform<B, F, U>(f: F, source: B) -> Transform<F, B::Store>
where
    B: Bind,
    F: Fn(Item<B>) -> U,
{
    Transform { f, store: source.bind() }
}

impl<F, St> Transform<F, St> {
    pub fn source(&self) -> &St {
        &self.store
    }
}

impl<F, St, U> Sequence for Transform<F, St>
where
    St: Store,
    F: Fn(<St::Seq as Sequence>::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = TransformCursor<'a, F, <St::Seq as Sequence>::Cursor<'a>>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        TransformCursor { f: &self.f, src: self.store.seq().begin() }
    }

    fn end(&self) -> Self::Cursor<'_> {
        TransformCursor { f: &self.f, src: self.store.seq().end() }
    }
}

bind_by_value!([F, St] Transform<F, St>);

/// 变换游标：位置即上游游标的位置，每次解引用都重新调用函数。
#[derive(Debug)]
pub struct TransformCursor<'a, F, C> {
    f: &'a F,
    src: C,
}

impl<F, C: Clone> Clone for TransformCursor<'_, F, C> {
    fn clone(&self) -> Self {
        TransformCursor { f: self.f, src: self.src.clone() }
    }
}

impl<F, C: PartialEq> PartialEq for TransformCursor<'_, F, C> {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src
    }
}

impl<F, C, U> Cursor for TransformCursor<'_, F, C>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;
    const RANDOM_ACCESS: bool = C::RANDOM_ACCESS;

    fn get(&self) -> U {
        (self.f)(self.src.get())
    }

    fn step(&mut self) {
        self.src.step()
    }
}

impl<F, C, U> RandomAccess for TransformCursor<'_, F, C>
where
    C: RandomAccess,
    F: Fn(C::Item) -> U,
{
    fn at(&self, i: usize) -> U {
        (self.f)(self.src.at(i))
    }

    fn offset(&self, n: isize) -> Self {
        TransformCursor { f: self.f, src: self.src.offset(n) }
    }

    fn distance(&self, origin: &Self) -> isize {
        self.src.distance(&origin.src)
    }
}

jump_ops!(['a, F, C] TransformCursor<'a, F, C>);
