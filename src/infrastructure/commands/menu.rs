//! `menu` 명령: 등록된 명령 이름 목록을 보여준다.

use crate::application::registry::CommandRegistry;
use crate::domain::command::{Command, CommandError};

/// 등록된 모든 명령 이름을 정렬해 나열한다.
///
/// 실행할 때마다 레지스트리를 새로 탐색하므로 REPL이 가진 레지스트리와 독립적이다.
pub struct MenuCommand {
    discover: fn() -> CommandRegistry,
}

impl Default for MenuCommand {
    fn default() -> Self {
        Self::with_discovery(CommandRegistry::discover)
    }
}

impl MenuCommand {
    /// 스냅샷을 만들 탐색 함수를 주입한다.
    pub fn with_discovery(discover: fn() -> CommandRegistry) -> Self {
        Self { discover }
    }
}

impl Command for MenuCommand {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn execute(&self, args: &[String]) -> Result<String, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::usage("The 'menu' command takes no arguments."));
        }

        let registry = (self.discover)();
        Ok(format!("Available commands: {}", registry.names().join(", ")))
    }
}
