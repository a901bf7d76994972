use crate::cursor::{Cursor, RandomAccess, Sequence, jump_ops};
use crate::err::Violation;
use crate::store::bind_by_value;
use std::fmt::Debug;

/// 可作为等差数列元素的数值类型。
pub trait Step: Copy + PartialEq + Debug {
    /// `self + step * n`
    fn advance(self, step: Self, n: isize) -> Self;

    /// 从`from`到`to`需要的步数，`step`为零时为零。
    fn span(from: Self, to: Self, step: Self) -> isize;
}

macro_rules! int_step {
    ($($ty:ty),+) => {
        $(
            impl Step for $ty {
                fn advance(self, step: Self, n: isize) -> Self {
                    (self as i128 + step as i128 * n as i128) as $ty
                }

                fn span(from: Self, to: Self, step: Self) -> isize {
                    if step == 0 { 0 } else { ((to as i128 - from as i128) / step as i128) as isize }
                }
            }
        )+
    };
}

macro_rules! float_step {
    ($($ty:ty),+) => {
        $(
            impl Step for $ty {
                fn advance(self, step: Self, n: isize) -> Self {
                    self + step * n as $ty
                }

                fn span(from: Self, to: Self, step: Self) -> isize {
                    if step == 0.0 { 0 } else { ((to - from) / step).round() as isize }
                }
            }
        )+
    };
}

int_step!(i32, i64, u32, u64, usize);
float_step!(f32, f64);

/// 等差数列，`count`为`None`时无界。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arith<T> {
    start: T,
    step: T,
    count: Option<usize>,
}

/// 从`start`开始、公差为`step`的无界等差数列。
pub fn sequence<T: Step>(start: T, step: T) -> Arith<T> {
    Arith { start, step, count: None }
}

impl<T: Step> Arith<T> {
    /// 只保留前`count`个元素。
    pub fn bounded(self, count: usize) -> Arith<T> {
        Arith { count: Some(count), ..self }
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }
}

/// 等差数列上的游标。
///
/// `left`为剩余元素个数，无界数列为`None`。无论有界与否，尾游标的`left`都是`Some(0)`，
/// 因此无界数列的游标永远不等于尾游标。无界数列的尾游标不对应任何位置，不能从它跳转。
#[derive(Debug, Clone, Copy)]
pub struct GenCursor<T> {
    v: T,
    step: T,
    left: Option<usize>,
    bounded: bool,
}

impl<T: Step> PartialEq for GenCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.left, other.left) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.v == other.v,
            _ => false,
        }
    }
}

impl<T: Step> Cursor for GenCursor<T> {
    type Item = T;
    const RANDOM_ACCESS: bool = true;

    fn get(&self) -> T {
        if self.left == Some(0) {
            Violation::DerefAtEnd("generator").raise()
        }
        self.v
    }

    fn step(&mut self) {
        match self.left {
            Some(0) => Violation::StepAtEnd("generator").raise(),
            Some(left) => self.left = Some(left - 1),
            None => {}
        }
        self.v = self.v.advance(self.step, 1);
    }
}

impl<T: Step> RandomAccess for GenCursor<T> {
    fn at(&self, i: usize) -> T {
        if let Some(left) = self.left
            && i >= left
        {
            Violation::OutOfRange { cursor: "generator", offset: i as isize }.raise()
        }
        self.v.advance(self.step, i as isize)
    }

    fn offset(&self, n: isize) -> Self {
        let left = match self.left {
            Some(_) if !self.bounded && n != 0 => Violation::OutOfRange { cursor: "generator", offset: n }.raise(),
            Some(left) => match (left as isize).checked_sub(n) {
                Some(rest) if rest >= 0 => Some(rest as usize),
                _ => Violation::OutOfRange { cursor: "generator", offset: n }.raise(),
            },
            None => None,
        };
        GenCursor { left, v: self.v.advance(self.step, n), ..*self }
    }

    fn distance(&self, origin: &Self) -> isize {
        match (self.left, origin.left) {
            (Some(a), Some(b)) => b as isize - a as isize,
            (None, None) => T::span(origin.v, self.v, self.step),
            // 无界游标到尾游标的距离视为无穷
            (Some(_), None) => isize::MAX,
            (None, Some(_)) => isize::MIN,
        }
    }
}

jump_ops!([T: Step] GenCursor<T>);

impl<T: Step> Sequence for Arith<T> {
    type Item = T;
    type Cursor<'a>
        = GenCursor<T>
    where
        T: 'a;

    fn begin(&self) -> GenCursor<T> {
        GenCursor { v: self.start, step: self.step, left: self.count, bounded: self.count.is_some() }
    }

    fn end(&self) -> GenCursor<T> {
        let passed = self.count.unwrap_or(0);
        GenCursor {
            v: self.start.advance(self.step, passed as isize),
            step: self.step,
            left: Some(0),
            bounded: self.count.is_some(),
        }
    }
}

bind_by_value!([T: Step] Arith<T>);
