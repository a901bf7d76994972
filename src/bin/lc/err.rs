use crate::println_err;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum LcErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unexpected remaining value `{remaining}` in argument `{arg}` of cmd `{cmd}`")]
    UnexpectedRemaining { cmd: &'static str, arg: &'static str, remaining: String },

    #[error("[Bad Arg] Invalid value `{arg_value}` in argument `{arg}` of cmd `{cmd}`: {reason}")]
    InvalidArg { cmd: &'static str, arg: &'static str, arg_value: String, reason: &'static str },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Input] Read line `{line_no}` of stdin error: {err}")]
    ReadStdinErr { line_no: usize, err: String },

    #[error("[Input] Line `{line_no}` of stdin is not an integer: `{line}`")]
    NotAnInteger { line_no: usize, line: String },

    #[error("[Output] Write to stdout error: {0}")]
    WriteStdoutErr(String),
}

impl Termination for LcErr {
    fn report(self) -> ExitCode {
        println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl LcErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            LcErr::ArgParseErr { .. } => 1,
            LcErr::UnexpectedRemaining { .. } => 2,
            LcErr::InvalidArg { .. } => 3,
            LcErr::MissingArg { .. } => 4,
            LcErr::ArgNotEnough { .. } => 5,
            LcErr::UnclosingMultiArg { .. } => 6,
            LcErr::UnexpectedClosingBracket { .. } => 7,
            LcErr::UnknownArgs { .. } => 8,
            LcErr::ReadStdinErr { .. } => 9,
            LcErr::NotAnInteger { .. } => 10,
            LcErr::WriteStdoutErr(_) => 11,
        }
    }
}
