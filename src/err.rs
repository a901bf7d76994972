use thiserror::Error;

/// 违反游标约定的调用方错误。
///
/// 迭代原语不返回错误，一旦检测到违约立即以此处的描述失败。
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Violation {
    #[error("[Deref] Dereference of an at-end `{0}` cursor")]
    DerefAtEnd(&'static str),

    #[error("[Step] Step past the end of a `{0}` cursor")]
    StepAtEnd(&'static str),

    #[error("[Jump] Jump by `{offset}` moves a `{cursor}` cursor out of its sequence")]
    OutOfRange { cursor: &'static str, offset: isize },

    #[error("[Compare] Cursors of `{0}` belong to different sequences")]
    ForeignCursor(&'static str),

    #[error("[Group] Consumer returned without consuming any element")]
    NoProgress,
}

impl Violation {
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{}", self)
    }
}
