pub(crate) mod args;
mod value;
