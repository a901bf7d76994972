use crate::Integer;
use lazychain::{
    Arith, Bind, Cursor, Expand, ExpandCursor, Feed, Filter, FilterCursor, GenCursor, Group, GroupCursor, Owned,
    Sequence, SliceCursor, Store, Transform, TransformCursor, Zip, ZipCursor, capability, expand, filter, group,
    transform, zip,
};

pub(crate) type MapFn = Box<dyn Fn(Integer) -> Integer>;
pub(crate) type TestFn = Box<dyn Fn(&Integer) -> bool>;
pub(crate) type PullFn = Box<dyn Fn(&mut dyn Feed<Item = Integer>) -> Integer>;
pub(crate) type SpreadFn = Box<dyn Fn(Integer) -> Vec<Integer>>;
pub(crate) type MergeFn = Box<dyn Fn((Integer, Integer)) -> Integer>;

type Pair = Zip<(Owned<Pipe>, Owned<Pipe>)>;

/// 运行时组装的整数流水线。
///
/// 每个操作按值包裹前一段流水线，适配器的具体类型在此擦除为枚举，
/// 因此整条流水线只能顺序访问；原本的随机访问能力由[`Pipe::capability`]按组合规则给出。
pub(crate) enum Pipe {
    Seq(Arith<Integer>),
    Values(Vec<Integer>),
    Map(Box<Transform<MapFn, Owned<Pipe>>>),
    Filter(Box<Filter<TestFn, Owned<Pipe>>>),
    Group(Box<Group<PullFn, Owned<Pipe>>>),
    Expand(Box<Expand<SpreadFn, Owned<Pipe>>>),
    Zip(Box<Transform<MergeFn, Owned<Pair>>>),
}

impl Pipe {
    pub(crate) fn map(self, f: MapFn) -> Pipe {
        Pipe::Map(Box::new(transform(f, self)))
    }

    pub(crate) fn filter(self, p: TestFn) -> Pipe {
        Pipe::Filter(Box::new(filter(p, self)))
    }

    pub(crate) fn group(self, f: PullFn) -> Pipe {
        Pipe::Group(Box::new(group(f, self)))
    }

    pub(crate) fn expand(self, f: SpreadFn) -> Pipe {
        Pipe::Expand(Box::new(expand(f, self)))
    }

    pub(crate) fn zip(self, other: Pipe, f: MergeFn) -> Pipe {
        Pipe::Zip(Box::new(transform(f, zip((self, other)))))
    }

    /// 擦除类型前这条流水线是否支持随机访问。
    pub(crate) fn capability(&self) -> bool {
        match self {
            Pipe::Seq(seq) => capability(seq),
            Pipe::Values(values) => capability(values),
            Pipe::Map(map) => map.source().seq().capability(),
            Pipe::Filter(_) | Pipe::Group(_) | Pipe::Expand(_) => false,
            Pipe::Zip(merged) => {
                let (left, right) = merged.source().seq().sources();
                left.seq().capability() && right.seq().capability()
            }
        }
    }
}

impl Bind for Pipe {
    type Store = Owned<Pipe>;

    fn bind(self) -> Owned<Pipe> {
        Owned::new(self)
    }
}

impl Sequence for Pipe {
    type Item = Integer;
    type Cursor<'a> = PipeCursor<'a>;

    fn begin(&self) -> PipeCursor<'_> {
        match self {
            Pipe::Seq(seq) => PipeCursor::Seq(seq.begin()),
            Pipe::Values(values) => PipeCursor::Values(values.begin()),
            Pipe::Map(map) => PipeCursor::Map(Box::new(map.begin())),
            Pipe::Filter(filter) => PipeCursor::Filter(Box::new(filter.begin())),
            Pipe::Group(group) => PipeCursor::Group(Box::new(group.begin())),
            Pipe::Expand(expand) => PipeCursor::Expand(Box::new(expand.begin())),
            Pipe::Zip(merged) => PipeCursor::Zip(Box::new(merged.begin())),
        }
    }

    fn end(&self) -> PipeCursor<'_> {
        match self {
            Pipe::Seq(seq) => PipeCursor::Seq(seq.end()),
            Pipe::Values(values) => PipeCursor::Values(values.end()),
            Pipe::Map(map) => PipeCursor::Map(Box::new(map.end())),
            Pipe::Filter(filter) => PipeCursor::Filter(Box::new(filter.end())),
            Pipe::Group(group) => PipeCursor::Group(Box::new(group.end())),
            Pipe::Expand(expand) => PipeCursor::Expand(Box::new(expand.end())),
            Pipe::Zip(merged) => PipeCursor::Zip(Box::new(merged.end())),
        }
    }
}

#[derive(Clone)]
pub(crate) enum PipeCursor<'a> {
    Seq(GenCursor<Integer>),
    Values(SliceCursor<'a, Integer>),
    Map(Box<TransformCursor<'a, MapFn, PipeCursor<'a>>>),
    Filter(Box<FilterCursor<'a, TestFn, PipeCursor<'a>>>),
    Group(Box<GroupCursor<'a, PullFn, PipeCursor<'a>, Integer>>),
    Expand(Box<ExpandCursor<'a, SpreadFn, PipeCursor<'a>, Vec<Integer>>>),
    Zip(Box<TransformCursor<'a, MergeFn, ZipCursor<(PipeCursor<'a>, PipeCursor<'a>)>>>),
}

impl PartialEq for PipeCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PipeCursor::Seq(a), PipeCursor::Seq(b)) => a == b,
            (PipeCursor::Values(a), PipeCursor::Values(b)) => a == b,
            (PipeCursor::Map(a), PipeCursor::Map(b)) => a == b,
            (PipeCursor::Filter(a), PipeCursor::Filter(b)) => a == b,
            (PipeCursor::Group(a), PipeCursor::Group(b)) => a == b,
            (PipeCursor::Expand(a), PipeCursor::Expand(b)) => a == b,
            (PipeCursor::Zip(a), PipeCursor::Zip(b)) => a == b,
            _ => false,
        }
    }
}

impl Cursor for PipeCursor<'_> {
    type Item = Integer;
    const RANDOM_ACCESS: bool = false;

    fn get(&self) -> Integer {
        match self {
            PipeCursor::Seq(c) => c.get(),
            PipeCursor::Values(c) => c.get(),
            PipeCursor::Map(c) => c.get(),
            PipeCursor::Filter(c) => c.get(),
            PipeCursor::Group(c) => c.get(),
            PipeCursor::Expand(c) => c.get(),
            PipeCursor::Zip(c) => c.get(),
        }
    }

    fn step(&mut self) {
        match self {
            PipeCursor::Seq(c) => c.step(),
            PipeCursor::Values(c) => c.step(),
            PipeCursor::Map(c) => c.step(),
            PipeCursor::Filter(c) => c.step(),
            PipeCursor::Group(c) => c.step(),
            PipeCursor::Expand(c) => c.step(),
            PipeCursor::Zip(c) => c.step(),
        }
    }
}
