//! 계산기 대화형 쉘(REPL) 인터페이스.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::application::ports::LineReader;
use crate::application::registry::CommandRegistry;
use crate::application::usecases::dispatch_command::{DispatchCommandUseCase, DispatchOutcome};
use crate::domain::command::CommandError;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::{
    BufferedLineReader, TerminalLineReader, supports_interactive_input,
};

pub const PROMPT: &str = ">>> ";
pub const WELCOME: &str =
    "Welcome to the Interactive Calculator. Type 'exit' to exit. Type menu to see existing commands";
pub const FAREWELL: &str = "Exiting the interactive calculator...";
pub const UNKNOWN_COMMAND: &str =
    "Unknown command. Type 'menu' to see available commands, or 'exit' to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Terminated,
}

/// 표준 입출력으로 REPL을 실행한다.
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let registry = composition.registry();
    let stdout = io::stdout();
    let stderr = io::stderr();

    if composition.config().interactive_input() && supports_interactive_input() {
        let names = registry.names().into_iter().map(str::to_string).collect();
        run_session(registry, TerminalLineReader::new(names), stdout, stderr)
    } else {
        let reader = BufferedLineReader::new(io::stdin().lock(), io::stdout());
        run_session(registry, reader, stdout, stderr)
    }
}

/// 입력기와 출력 스트림을 받아 `exit`까지 세션을 진행한다.
///
/// 명령 실패는 모두 이 경계에서 한 줄 메시지로 복구된다.
/// 입력이 끝나면(EOF) `exit`과 같이 종료한다.
pub fn run_session<R, O, E>(
    registry: &CommandRegistry,
    mut reader: R,
    mut out: O,
    mut err: E,
) -> Result<()>
where
    R: LineReader,
    O: Write,
    E: Write,
{
    let dispatcher = DispatchCommandUseCase { registry };
    let mut state = SessionState::Running;

    writeln!(out, "{WELCOME}")?;
    out.flush()?;

    while state == SessionState::Running {
        let Some(line) = reader.read_line(PROMPT)? else {
            debug!("input closed, ending session");
            writeln!(out)?;
            writeln!(out, "{FAREWELL}")?;
            state = SessionState::Terminated;
            continue;
        };

        match dispatcher.execute(&line) {
            DispatchOutcome::Skipped => {}
            DispatchOutcome::Exit => {
                writeln!(out, "{FAREWELL}")?;
                state = SessionState::Terminated;
            }
            DispatchOutcome::Output(text) => writeln!(out, "{text}")?,
            DispatchOutcome::UnknownCommand(_) => writeln!(out, "{UNKNOWN_COMMAND}")?,
            DispatchOutcome::Failed(failure) => report_failure(&mut out, &mut err, &failure)?,
        }
        out.flush()?;
    }

    info!("session terminated");
    Ok(())
}

fn report_failure<O: Write, E: Write>(out: &mut O, err: &mut E, failure: &CommandError) -> Result<()> {
    if failure.is_recoverable() {
        writeln!(out, "Error: {failure}")?;
    } else {
        writeln!(err, "Unexpected error: {failure}")?;
        err.flush()?;
    }
    Ok(())
}
