//! CLI 인자 파싱 모듈.
//! 동작 옵션은 없고 `--help`/`--version`만 제공한다.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "calcrepl", version)]
#[command(about = "Interactive calculator REPL")]
#[command(
    long_about = "Interactive calculator REPL.\n\n\
Commands: add, subtract, multiply, divide <num1> <num2>; menu; exit.\n\
Config: /etc/calcrepl/config.json, <config dir>/calcrepl/config.json, \
.calcrepl/config.json, $CALCREPL_CONFIG (later wins). \
ENV_NAME and LOG_LEVEL override file values; RUST_LOG overrides LOG_LEVEL."
)]
pub struct Cli {}

impl Cli {
    /// 인자를 검사한다. `--help`/`--version`이면 clap이 출력 후 종료한다.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
