//! Domain layer
//! 명령 계약과 피연산자 규칙을 정의한다.

pub mod command;
pub mod operand;
