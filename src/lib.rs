//! 惰性、可组合的游标适配器。
//!
//! 每个适配器包装一个源序列（按引用借用或按值持有），自身也是一个序列，因此可以任意嵌套：
//!
//! ```
//! use lazychain::{Chain, Sequence};
//!
//! let values = vec![0, 1, 2, 3, 4, 5];
//! let chain = (&values).filter(|v: &i32| *v > 2).transform(|v: i32| v + 1);
//! assert_eq!(chain.materialize::<Vec<_>>(), vec![4, 5, 6]);
//! assert_eq!(chain.fold(0, |acc, v| acc + v), 15);
//! ```
//!
//! 求值完全由调用者驱动：构造链、解引用、步进之外不会发生任何计算。

mod chain;
mod cursor;
mod err;
mod expand;
mod filter;
mod fold;
mod generator;
mod group;
mod native;
mod store;
mod transform;
mod walk;
mod zip;

pub use chain::{Chain, Item};
pub use cursor::{Cursor, RandomAccess, Sequence, capability};
pub use err::Violation;
pub use expand::{Expand, ExpandCursor, expand};
pub use filter::{Filter, FilterCursor, filter};
pub use fold::{fold, fold_range};
pub use generator::{Arith, GenCursor, Step, sequence};
pub use group::{Feed, Group, GroupCursor, Reader, group};
pub use native::{CharCursor, DequeCursor, ListCursor, SliceCursor};
pub use store::{Bind, Borrowed, Owned, Store};
pub use transform::{Transform, TransformCursor, transform};
pub use walk::Walk;
pub use zip::{Zip, ZipBind, ZipCursor, zip};
