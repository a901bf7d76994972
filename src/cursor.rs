use crate::walk::Walk;

/// 游标：序列中的一个位置，支持解引用、步进和判等。
///
/// 同一序列的两个游标相等，当且仅当它们在"是否已到末尾"上一致，且（未到末尾时）位置一致。
/// 对已到末尾的游标解引用或步进属于调用方错误，会以 [`Violation`](crate::Violation) 失败。
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// 能力标记：是否支持常数时间的下标访问、跳转和求距离。
    ///
    /// 仅由组合结构决定，为`true`时游标同时实现[`RandomAccess`]。
    const RANDOM_ACCESS: bool;

    /// 解引用，每次调用都重新计算。
    fn get(&self) -> Self::Item;

    /// 前进一个位置。
    fn step(&mut self);
}

/// 随机访问游标，仅在能力标记为`true`的游标上实现。
pub trait RandomAccess: Cursor {
    /// 读取当前位置之后第`i`个元素，不移动游标。
    fn at(&self, i: usize) -> Self::Item;

    /// 返回移动`n`个位置后的游标，`n`可以为负。
    fn offset(&self, n: isize) -> Self;

    /// `self`相对`origin`的距离，即`self - origin`。
    fn distance(&self, origin: &Self) -> isize;
}

/// 序列：可以构造首尾游标的对象。
///
/// 原生容器、生成器以及所有适配器都实现此特征，适配器借由[`Bind`](crate::Bind)持有上游序列。
pub trait Sequence {
    type Item;
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_>;

    fn end(&self) -> Self::Cursor<'_>;

    /// 从头到尾顺序遍历。
    fn walk(&self) -> Walk<Self::Cursor<'_>> {
        Walk::new(self.begin(), self.end())
    }

    /// 逐个复制到具体集合。
    fn materialize<B>(&self) -> B
    where
        B: FromIterator<Self::Item>,
    {
        self.walk().collect()
    }
}

/// 查询序列的能力标记，不构造任何游标，也不触碰数据。
pub fn capability<'a, S>(_: &'a S) -> bool
where
    S: Sequence + ?Sized + 'a,
{
    <S::Cursor<'a> as Cursor>::RANDOM_ACCESS
}

/// 为随机访问游标生成`cursor + n`、`cursor - n`和`a - b`运算符。
macro_rules! jump_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> std::ops::Add<usize> for $ty
        where
            $ty: $crate::cursor::RandomAccess,
        {
            type Output = Self;

            fn add(self, n: usize) -> Self {
                $crate::cursor::RandomAccess::offset(&self, n as isize)
            }
        }

        impl<$($gen)*> std::ops::Sub<usize> for $ty
        where
            $ty: $crate::cursor::RandomAccess,
        {
            type Output = Self;

            fn sub(self, n: usize) -> Self {
                $crate::cursor::RandomAccess::offset(&self, -(n as isize))
            }
        }

        impl<$($gen)*> std::ops::Sub for $ty
        where
            $ty: $crate::cursor::RandomAccess,
        {
            type Output = isize;

            fn sub(self, origin: Self) -> isize {
                $crate::cursor::RandomAccess::distance(&self, &origin)
            }
        }
    };
}

pub(crate) use jump_ops;
