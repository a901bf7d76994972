use crate::cursor::{Cursor, RandomAccess, Sequence, jump_ops};
use crate::err::Violation;
use crate::store::{Bind, Store, bind_by_value};

/// 同步推进多个上游，任一上游结束即结束。
///
/// 单个上游时元素就是上游元素本身，多个上游时元素为元组。
#[derive(Debug, Clone)]
pub struct Zip<T> {
    stores: T,
}

/// 可以逐个绑定的上游元组。
pub trait ZipBind {
    type Stores;

    fn bind_all(self) -> Self::Stores;
}

/// 将1到4个上游组合为一个序列，每个上游独立选择引用绑定或值绑定。
pub fn zip<Z: ZipBind>(sources: Z) -> Zip<Z::Stores> {
    Zip { stores: sources.bind_all() }
}

impl<T> Zip<T> {
    /// 各上游的绑定，顺序与构造时一致。
    pub fn sources(&self) -> &T {
        &self.stores
    }
}

bind_by_value!([T] Zip<T>);

#[derive(Debug, Clone)]
pub struct ZipCursor<T> {
    cur: T,
    end: T,
    finished: bool,
}

macro_rules! zip_impls {
    ($($S:ident $C:ident $idx:tt),+) => {
        impl<$($S: Bind),+> ZipBind for ($($S,)+) {
            type Stores = ($($S::Store,)+);

            fn bind_all(self) -> Self::Stores {
                ($(self.$idx.bind(),)+)
            }
        }

        #[allow(unused_parens)]
        impl<$($S: Store),+> Sequence for Zip<($($S,)+)> {
            type Item = ($(<$S::Seq as Sequence>::Item),+);
            type Cursor<'a>
                = ZipCursor<($(<$S::Seq as Sequence>::Cursor<'a>,)+)>
            where
                Self: 'a;

            fn begin(&self) -> Self::Cursor<'_> {
                <Self::Cursor<'_>>::new(
                    ($(self.stores.$idx.seq().begin(),)+),
                    ($(self.stores.$idx.seq().end(),)+),
                )
            }

            fn end(&self) -> Self::Cursor<'_> {
                <Self::Cursor<'_>>::new(
                    ($(self.stores.$idx.seq().end(),)+),
                    ($(self.stores.$idx.seq().end(),)+),
                )
            }
        }

        impl<$($C: Cursor),+> ZipCursor<($($C,)+)> {
            fn new(cur: ($($C,)+), end: ($($C,)+)) -> Self {
                let finished = false $(|| cur.$idx == end.$idx)+;
                ZipCursor { cur, end, finished }
            }

            fn refresh(&mut self) {
                self.finished = false $(|| self.cur.$idx == self.end.$idx)+;
            }
        }

        impl<$($C: Cursor),+> PartialEq for ZipCursor<($($C,)+)> {
            fn eq(&self, other: &Self) -> bool {
                (self.finished && other.finished) || (true $(&& self.cur.$idx == other.cur.$idx)+)
            }
        }

        #[allow(unused_parens)]
        impl<$($C: Cursor),+> Cursor for ZipCursor<($($C,)+)> {
            type Item = ($($C::Item),+);
            const RANDOM_ACCESS: bool = true $(&& $C::RANDOM_ACCESS)+;

            fn get(&self) -> Self::Item {
                if self.finished {
                    Violation::DerefAtEnd("zip").raise()
                }
                ($(self.cur.$idx.get()),+)
            }

            fn step(&mut self) {
                if self.finished {
                    Violation::StepAtEnd("zip").raise()
                }
                $(self.cur.$idx.step();)+
                self.refresh();
            }
        }

        #[allow(unused_parens)]
        impl<$($C: RandomAccess),+> RandomAccess for ZipCursor<($($C,)+)> {
            fn at(&self, i: usize) -> Self::Item {
                ($(self.cur.$idx.at(i)),+)
            }

            fn offset(&self, n: isize) -> Self {
                let mut cursor = ZipCursor {
                    cur: ($(self.cur.$idx.offset(n),)+),
                    end: self.end.clone(),
                    finished: false,
                };
                cursor.refresh();
                cursor
            }

            /// 各分量距离中绝对值最小者，即最短上游决定的剩余长度。
            fn distance(&self, origin: &Self) -> isize {
                [$(self.cur.$idx.distance(&origin.cur.$idx)),+]
                    .into_iter()
                    .min_by_key(|d| d.unsigned_abs())
                    .unwrap_or(0)
            }
        }

        jump_ops!([$($C),+] ZipCursor<($($C,)+)>);
    };
}

zip_impls!(SA CA 0);
zip_impls!(SA CA 0, SB CB 1);
zip_impls!(SA CA 0, SB CB 1, SC CC 2);
zip_impls!(SA CA 0, SB CB 1, SC CC 2, SD CD 3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability;
    use crate::filter::filter;
    use crate::generator::sequence;

    #[test]
    fn test_shortest_wins() {
        let ints = vec![1, 2, 3, 4];
        let floats = vec![0.1, 0.2];
        let pairs = zip((&ints, &floats));
        assert_eq!(pairs.materialize::<Vec<_>>(), vec![(1, 0.1), (2, 0.2)]);
        assert_eq!(pairs.end() - pairs.begin(), 2);
    }

    #[test]
    fn test_arity() {
        let one = zip((vec!['x', 'y'],));
        assert_eq!(one.materialize::<String>(), "xy");

        let words = ["a", "b", "c"];
        let triples = zip((&words, sequence(1, 1), "xyz"));
        assert_eq!(triples.walk().nth(2), Some(("c", 3, 'z')));

        let quads = zip((&words, &words, &words, &words));
        assert_eq!(quads.walk().count(), 3);
    }

    #[test]
    fn test_capability() {
        let values = vec![1, 2, 3];
        assert!(capability(&zip((&values, sequence(0u32, 2)))));
        assert!(!capability(&zip((&values, filter(|_: &i32| true, &values)))));
        assert!(!capability(&zip((&values, "abc"))));
    }

    #[test]
    fn test_random_access() {
        let values = vec![10, 20, 30, 40];
        let chain = zip((&values, sequence(0usize, 1)));
        let (begin, end) = (chain.begin(), chain.end());
        assert_eq!(end.clone() - begin.clone(), 4);
        assert_eq!(begin.clone() - end.clone(), -4);
        assert_eq!((begin.clone() + 3usize).get(), (40, 3));
        assert_eq!(begin.at(1), (20, 1));
        assert!(begin + 4usize == end);
    }

    #[test]
    fn test_empty_component() {
        let values = vec![1, 2];
        let chain = zip((&values, Vec::<u8>::new()));
        assert!(chain.begin() == chain.end());
    }

    #[test]
    fn test_begin_end_each_arity() {
        let values = [1, 2];
        assert_eq!(zip((&values,)).end() - zip((&values,)).begin(), 2);
        let pairs = zip((&values, &values));
        assert_eq!((pairs.end() - 1usize).get(), (2, 2));
        let triples = zip((&values, &values, &values));
        assert!(triples.begin() + 2usize == triples.end());
        let quads = zip((&values, &values, &values, &values));
        assert_eq!(quads.begin().get(), (1, 1, 1, 1));
    }

    #[test]
    #[should_panic(expected = "moves a `generator` cursor out of its sequence")]
    fn test_jump_back_with_unbounded_component() {
        let values = [10, 20, 30, 40];
        let indexed = zip((&values, sequence(0i64, 1)));
        let _ = indexed.end() - 1usize;
    }

    #[test]
    #[should_panic(expected = "[Deref] Dereference of an at-end `zip` cursor")]
    fn test_deref_at_end() {
        let values = vec![1];
        zip((&values, &values)).end().get();
    }
}
