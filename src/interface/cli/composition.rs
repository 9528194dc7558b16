//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::Config;
use crate::application::registry::CommandRegistry;

/// 세션 동안 유지되는 설정과 명령 레지스트리를 한 곳에서 조립한다.
pub struct AppComposition {
    config: Config,
    registry: CommandRegistry,
}

impl AppComposition {
    /// 설정을 받아 내장 명령을 탐색한다.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: CommandRegistry::discover(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
