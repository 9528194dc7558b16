//! 명령 계약(trait)과 명령 실행 오류 분류.

use thiserror::Error;

/// 모든 계산기 명령이 구현하는 계약.
///
/// 명령은 상태를 가지지 않으며, REPL은 매 입력마다 새 인스턴스를 만든다.
pub trait Command {
    /// 레지스트리 키로 쓰이는 소문자 명령 이름.
    fn name(&self) -> &'static str;

    /// 위치 인자를 받아 출력 문자열을 만들거나 분류된 오류를 반환한다.
    fn execute(&self, args: &[String]) -> Result<String, CommandError>;
}

/// 명령 인스턴스를 생성하는 팩토리.
pub type CommandFactory = fn() -> Box<dyn Command>;

/// 명령 실행 실패 분류. REPL 경계에서 모두 복구된다.
#[derive(Debug, Error)]
pub enum CommandError {
    /// 인자 개수가 맞지 않거나 무인자 명령에 인자가 주어짐
    #[error("{0}")]
    Usage(String),

    /// 인자를 실수로 해석할 수 없음
    #[error("{0}")]
    InvalidNumber(String),

    #[error("Cannot divide by zero.")]
    DivideByZero,

    /// 그 밖의 예기치 못한 실패
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn invalid_number(message: impl Into<String>) -> Self {
        Self::InvalidNumber(message.into())
    }

    /// 사용자에게 `Error:` 접두어로 보여줄 복구 가능한 오류인지 여부.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}
