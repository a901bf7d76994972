use crate::cursor::Sequence;
use std::collections::{LinkedList, VecDeque};

/// 源绑定：适配器通过它访问上游序列，不关心上游是借用的还是持有的。
pub trait Store {
    type Seq: Sequence + ?Sized;

    fn seq(&self) -> &Self::Seq;
}

/// 引用绑定：调用方保留所有权，链的生命周期受借用约束。
#[derive(Debug)]
pub struct Borrowed<'s, S: ?Sized>(&'s S);

/// 值绑定：链持有上游序列，随最外层链一起销毁。
#[derive(Debug)]
pub struct Owned<S>(S);

impl<S: Sequence> Owned<S> {
    /// 显式按值绑定，用于未实现[`Bind`]的自定义序列。
    pub fn new(seq: S) -> Owned<S> {
        Owned(seq)
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Sequence + ?Sized> Store for Borrowed<'_, S> {
    type Seq = S;

    fn seq(&self) -> &S {
        self.0
    }
}

impl<S: Sequence> Store for Owned<S> {
    type Seq = S;

    fn seq(&self) -> &S {
        &self.0
    }
}

/// 按实参的所有权类别选择绑定方式：`&seq`得到引用绑定，`seq`得到值绑定。
pub trait Bind {
    type Store: Store;

    fn bind(self) -> Self::Store;
}

impl<'s, S: Sequence + ?Sized> Bind for &'s S {
    type Store = Borrowed<'s, S>;

    fn bind(self) -> Borrowed<'s, S> {
        Borrowed(self)
    }
}

impl<S: Sequence> Bind for Owned<S> {
    type Store = Owned<S>;

    fn bind(self) -> Owned<S> {
        self
    }
}

/// 为具体的序列类型生成值绑定。
macro_rules! bind_by_value {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> $crate::store::Bind for $ty
        where
            $ty: $crate::cursor::Sequence,
        {
            type Store = $crate::store::Owned<$ty>;

            fn bind(self) -> Self::Store {
                $crate::store::Owned::new(self)
            }
        }
    };
}

pub(crate) use bind_by_value;

bind_by_value!([T] Vec<T>);
bind_by_value!([T, const N: usize] [T; N]);
bind_by_value!([T] VecDeque<T>);
bind_by_value!([T] LinkedList<T>);
bind_by_value!([] String);
