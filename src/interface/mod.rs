//! Interface layer
//! 사용자 입출력(CLI/REPL)을 애플리케이션 계층에 연결한다.

pub mod cli;
