//! CLI 인터페이스 모듈 묶음.
//! 인자 파싱/REPL/입력 처리/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod repl;
pub mod repl_input;

pub use command::Cli;
pub use composition::AppComposition;
pub use repl::{run_repl, run_session};
