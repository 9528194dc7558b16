//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::Deserialize;

pub const DEFAULT_ENV_NAME: &str = "unknown-env";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// REPL 입력 설정
    #[serde(default)]
    pub repl: ReplConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsConfig {
    /// 시작 로그에 남길 실행 환경 이름
    pub env_name: Option<String>,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReplConfig {
    /// TTY에서 줄 편집기(명령 추천) 사용 여부(기본 true)
    pub interactive_input: Option<bool>,
}

impl Config {
    pub fn env_name(&self) -> &str {
        self.defaults.env_name.as_deref().unwrap_or(DEFAULT_ENV_NAME)
    }

    pub fn log_level(&self) -> &str {
        self.defaults.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn interactive_input(&self) -> bool {
        self.repl.interactive_input.unwrap_or(true)
    }

    /// 우선순위가 높은 설정(`other`)의 값으로 덮어쓴다.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.repl.merge_from(other.repl);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.env_name.is_some() {
            self.env_name = other.env_name;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }
}

impl ReplConfig {
    pub fn merge_from(&mut self, other: ReplConfig) {
        if other.interactive_input.is_some() {
            self.interactive_input = other.interactive_input;
        }
    }
}
