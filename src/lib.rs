//! calcrepl library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::Config;
use interface::cli::{AppComposition, run_repl};

/// 표준 입출력으로 계산기 REPL을 실행한다.
pub fn start(config: Config) -> Result<()> {
    let composition = AppComposition::new(config);
    run_repl(&composition)
}
