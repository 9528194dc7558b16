//! 입력 한 줄을 해석해 명령을 실행하고 결과를 분류하는 유스케이스.

use tracing::debug;

use crate::application::registry::CommandRegistry;
use crate::domain::command::CommandError;

const EXIT_DIRECTIVE: &str = "exit";

/// 입력 한 줄의 해석 결과.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedInput {
    Empty,
    Exit,
    Invoke { name: String, args: Vec<String> },
}

/// 한 턴의 실행 결과. REPL은 결과마다 정확히 한 줄을 출력한다.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// 빈 입력. 아무것도 출력하지 않는다.
    Skipped,
    Exit,
    Output(String),
    UnknownCommand(String),
    Failed(CommandError),
}

/// 입력을 공백 단위로 나눈다. 첫 토큰은 소문자로 바꿔 명령 이름으로 쓴다.
pub fn parse_input(line: &str) -> ParsedInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedInput::Empty;
    }
    if trimmed.eq_ignore_ascii_case(EXIT_DIRECTIVE) {
        return ParsedInput::Exit;
    }

    let mut parts = trimmed.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    ParsedInput::Invoke { name, args }
}

/// 레지스트리에서 명령을 찾아 새 인스턴스로 실행한다.
pub struct DispatchCommandUseCase<'a> {
    pub registry: &'a CommandRegistry,
}

impl<'a> DispatchCommandUseCase<'a> {
    pub fn execute(&self, line: &str) -> DispatchOutcome {
        let (name, args) = match parse_input(line) {
            ParsedInput::Empty => return DispatchOutcome::Skipped,
            ParsedInput::Exit => return DispatchOutcome::Exit,
            ParsedInput::Invoke { name, args } => (name, args),
        };

        let Some(factory) = self.registry.lookup(&name) else {
            debug!(command = %name, "unknown command");
            return DispatchOutcome::UnknownCommand(name);
        };

        debug!(command = %name, argc = args.len(), "dispatching command");
        match factory().execute(&args) {
            Ok(output) => DispatchOutcome::Output(output),
            Err(err) => {
                debug!(command = %name, error = %err, "command failed");
                DispatchOutcome::Failed(err)
            }
        }
    }
}
