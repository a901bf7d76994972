use crate::cursor::Sequence;
use crate::expand::{Expand, expand};
use crate::filter::{Filter, filter};
use crate::fold::fold;
use crate::group::{Feed, Group, group};
use crate::store::{Bind, Store};
use crate::transform::{Transform, transform};
use crate::zip::{Zip, zip};
use std::ops::Deref;

/// 绑定后的上游元素类型。
pub type Item<B> = <<<B as Bind>::Store as Store>::Seq as Sequence>::Item;

/// 以方法调用的形式串联适配器，与对应的自由函数完全等价。
///
/// 对`&seq`调用时按引用绑定，对`seq`调用时按值绑定。
pub trait Chain: Bind + Sized {
    fn transform<F, U>(self, f: F) -> Transform<F, Self::Store>
    where
        F: Fn(Item<Self>) -> U,
    {
        transform(f, self)
    }

    fn filter<P>(self, p: P) -> Filter<P, Self::Store>
    where
        P: Fn(&Item<Self>) -> bool,
    {
        filter(p, self)
    }

    fn group<F, T>(self, f: F) -> Group<F, Self::Store>
    where
        F: Fn(&mut dyn Feed<Item = Item<Self>>) -> T,
        T: Clone,
    {
        group(f, self)
    }

    fn expand<F, R, O>(self, f: F) -> Expand<F, Self::Store>
    where
        F: Fn(Item<Self>) -> R,
        R: Deref<Target = [O]> + Clone,
        O: Clone,
    {
        expand(f, self)
    }

    fn zip<B: Bind>(self, other: B) -> Zip<(Self::Store, B::Store)> {
        zip((self, other))
    }

    fn fold<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, Item<Self>) -> A,
    {
        fold(f, self, seed)
    }
}

impl<B: Bind> Chain for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::capability;
    use crate::generator::sequence;

    #[test]
    fn test_composition_order() {
        let values = vec![0, 1, 2, 3, 4, 5];
        let a = (&values).filter(|v| *v > 2).transform(|v| v + 1);
        assert_eq!(a.materialize::<Vec<_>>(), vec![4, 5, 6]);
        let b = (&values).transform(|v| v + 1).filter(|v| *v > 2);
        assert_eq!(b.materialize::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_by_value_chain() {
        let total = vec![1, 2, 3, 4, 5, 6]
            .group(|feed| feed.take(2).product::<i32>())
            .expand(|v| vec![v; 2])
            .fold(0, |acc, v| acc + v);
        assert_eq!(total, 2 * (2 + 12 + 30));
    }

    #[test]
    fn test_zip_method() {
        let names = ["x", "y"];
        let chain = (&names).zip(sequence(1, 1)).transform(|(name, n)| format!("{name}{n}"));
        assert!(capability(&chain));
        assert_eq!(chain.materialize::<Vec<_>>(), vec!["x1", "y2"]);
    }
}
