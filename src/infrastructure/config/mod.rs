//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고 환경변수 값을 반영한다.

mod loader;

use anyhow::Result;

pub use crate::application::config::{Config, DefaultsConfig, ReplConfig};
pub use loader::{CONFIG_PATH_ENV, config_paths};

/// 병합된 최종 설정을 로딩한다.
pub fn load() -> Result<Config> {
    let loaded = loader::load_merged_config()?;
    tracing::debug!(paths = ?loaded.loaded_paths, "config loaded");
    Ok(loaded.config)
}
