use crate::cursor::Cursor;
use std::iter::FusedIterator;

/// 由首尾游标组成的迭代器，是游标世界与`Iterator`之间的桥。
#[derive(Debug, Clone)]
pub struct Walk<C> {
    pos: C,
    end: C,
}

impl<C> Walk<C> {
    pub fn new(pos: C, end: C) -> Walk<C> {
        Walk { pos, end }
    }

    /// 下一次`next`将读取的位置。
    pub fn position(&self) -> &C {
        &self.pos
    }

    pub fn into_parts(self) -> (C, C) {
        (self.pos, self.end)
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.pos == self.end {
            None
        } else {
            let item = self.pos.get();
            self.pos.step();
            Some(item)
        }
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Sequence;

    #[test]
    fn test_walk() {
        let values = vec![1, 2, 3];
        let mut walk = values.walk();
        assert_eq!(walk.next(), Some(1));
        assert_eq!(walk.position().get(), 2);
        assert_eq!(walk.by_ref().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
        let (pos, end) = walk.into_parts();
        assert!(pos == end);
    }
}
