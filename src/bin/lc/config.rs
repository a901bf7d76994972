#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息及随机访问能力 `-v`
    Verbose,
    /// 仅解析并构建流水线，不输出 `-d`
    DryRun,
}
