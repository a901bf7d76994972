use crate::cursor::{Cursor, RandomAccess, Sequence, jump_ops};
use crate::err::Violation;
use std::collections::linked_list::{self, LinkedList};
use std::collections::VecDeque;

/// 连续存储（切片、`Vec`、数组）上的游标，解引用得到元素的克隆。
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    fn new(items: &'a [T], pos: usize) -> Self {
        SliceCursor { items, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.items, other.items), "{}", Violation::ForeignCursor("slice"));
        self.pos == other.pos
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Item = T;
    const RANDOM_ACCESS: bool = true;

    fn get(&self) -> T {
        match self.items.get(self.pos) {
            Some(item) => item.clone(),
            None => Violation::DerefAtEnd("slice").raise(),
        }
    }

    fn step(&mut self) {
        if self.pos >= self.items.len() {
            Violation::StepAtEnd("slice").raise()
        }
        self.pos += 1;
    }
}

impl<T: Clone> RandomAccess for SliceCursor<'_, T> {
    fn at(&self, i: usize) -> T {
        match self.items.get(self.pos + i) {
            Some(item) => item.clone(),
            None => Violation::OutOfRange { cursor: "slice", offset: i as isize }.raise(),
        }
    }

    fn offset(&self, n: isize) -> Self {
        match self.pos.checked_add_signed(n) {
            Some(pos) if pos <= self.items.len() => SliceCursor::new(self.items, pos),
            _ => Violation::OutOfRange { cursor: "slice", offset: n }.raise(),
        }
    }

    fn distance(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

jump_ops!(['a, T: Clone] SliceCursor<'a, T>);

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        T: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self, 0)
    }

    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self, self.len())
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        T: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        self.as_slice().begin()
    }

    fn end(&self) -> SliceCursor<'_, T> {
        self.as_slice().end()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        T: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        self.as_slice().begin()
    }

    fn end(&self) -> SliceCursor<'_, T> {
        self.as_slice().end()
    }
}

/// `VecDeque`上的游标，按逻辑下标访问，支持随机访问。
#[derive(Debug, Clone)]
pub struct DequeCursor<'a, T> {
    items: &'a VecDeque<T>,
    pos: usize,
}

impl<T> PartialEq for DequeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.items, other.items), "{}", Violation::ForeignCursor("deque"));
        self.pos == other.pos
    }
}

impl<T: Clone> Cursor for DequeCursor<'_, T> {
    type Item = T;
    const RANDOM_ACCESS: bool = true;

    fn get(&self) -> T {
        match self.items.get(self.pos) {
            Some(item) => item.clone(),
            None => Violation::DerefAtEnd("deque").raise(),
        }
    }

    fn step(&mut self) {
        if self.pos >= self.items.len() {
            Violation::StepAtEnd("deque").raise()
        }
        self.pos += 1;
    }
}

impl<T: Clone> RandomAccess for DequeCursor<'_, T> {
    fn at(&self, i: usize) -> T {
        match self.items.get(self.pos + i) {
            Some(item) => item.clone(),
            None => Violation::OutOfRange { cursor: "deque", offset: i as isize }.raise(),
        }
    }

    fn offset(&self, n: isize) -> Self {
        match self.pos.checked_add_signed(n) {
            Some(pos) if pos <= self.items.len() => DequeCursor { items: self.items, pos },
            _ => Violation::OutOfRange { cursor: "deque", offset: n }.raise(),
        }
    }

    fn distance(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

jump_ops!(['a, T: Clone] DequeCursor<'a, T>);

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = DequeCursor<'a, T>
    where
        T: 'a;

    fn begin(&self) -> DequeCursor<'_, T> {
        DequeCursor { items: self, pos: 0 }
    }

    fn end(&self) -> DequeCursor<'_, T> {
        DequeCursor { items: self, pos: self.len() }
    }
}

/// 链表上的游标，只能顺序访问；位置以剩余元素个数表示。
#[derive(Debug, Clone)]
pub struct ListCursor<'a, T> {
    rest: linked_list::Iter<'a, T>,
}

impl<T> PartialEq for ListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rest.len() == other.rest.len()
    }
}

impl<T: Clone> Cursor for ListCursor<'_, T> {
    type Item = T;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> T {
        match self.rest.clone().next() {
            Some(item) => item.clone(),
            None => Violation::DerefAtEnd("list").raise(),
        }
    }

    fn step(&mut self) {
        if self.rest.next().is_none() {
            Violation::StepAtEnd("list").raise()
        }
    }
}

impl<T: Clone> Sequence for LinkedList<T> {
    type Item = T;
    type Cursor<'a>
        = ListCursor<'a, T>
    where
        T: 'a;

    fn begin(&self) -> ListCursor<'_, T> {
        ListCursor { rest: self.iter() }
    }

    fn end(&self) -> ListCursor<'_, T> {
        let mut rest = self.iter();
        rest.nth(self.len());
        ListCursor { rest }
    }
}

/// 字符串上按字符前进的游标，位置为字节偏移。
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl PartialEq for CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Cursor for CharCursor<'_> {
    type Item = char;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> char {
        match self.text[self.pos..].chars().next() {
            Some(c) => c,
            None => Violation::DerefAtEnd("chars").raise(),
        }
    }

    fn step(&mut self) {
        match self.text[self.pos..].chars().next() {
            Some(c) => self.pos += c.len_utf8(),
            None => Violation::StepAtEnd("chars").raise(),
        }
    }
}

impl Sequence for str {
    type Item = char;
    type Cursor<'a> = CharCursor<'a>;

    fn begin(&self) -> CharCursor<'_> {
        CharCursor { text: self, pos: 0 }
    }

    fn end(&self) -> CharCursor<'_> {
        CharCursor { text: self, pos: self.len() }
    }
}

impl Sequence for String {
    type Item = char;
    type Cursor<'a> = CharCursor<'a>;

    fn begin(&self) -> CharCursor<'_> {
        self.as_str().begin()
    }

    fn end(&self) -> CharCursor<'_> {
        self.as_str().end()
    }
}
