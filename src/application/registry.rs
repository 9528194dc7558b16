//! 명령 이름 → 팩토리 레지스트리.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::command::CommandFactory;
use crate::infrastructure::commands::BUILTIN_COMMANDS;

/// 생성 이후 변경되지 않는 명령 레지스트리.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandFactory>,
}

impl CommandRegistry {
    /// 내장 등록 테이블을 탐색해 레지스트리를 만든다.
    pub fn discover() -> Self {
        Self::from_factories(BUILTIN_COMMANDS)
    }

    /// 주어진 팩토리 목록으로 레지스트리를 만든다.
    ///
    /// 각 팩토리를 한 번 실행해 선언된 이름을 읽고, 인스턴스가 아닌 팩토리를 기록한다.
    /// 이름이 잘못된 명령은 건너뛰고, 중복 이름은 뒤의 항목이 덮어쓴다.
    pub fn from_factories(factories: &[CommandFactory]) -> Self {
        let mut commands = BTreeMap::new();

        for factory in factories {
            let name = factory().name();
            if !is_valid_name(name) {
                warn!(name, "skipping command with malformed name");
                continue;
            }

            if commands.insert(name.to_string(), *factory).is_some() {
                warn!(name, "duplicate command name, later registration wins");
            } else {
                debug!(name, "registered command");
            }
        }

        Self { commands }
    }

    /// 이름(대소문자 무시)으로 팩토리를 찾는다. 접두어/유사 매칭은 하지 않는다.
    pub fn lookup(&self, name: &str) -> Option<CommandFactory> {
        self.commands.get(&name.to_lowercase()).copied()
    }

    /// 등록된 이름을 사전순으로 반환한다.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_whitespace)
        && !name.chars().any(char::is_uppercase)
}
