//! `calcrepl` 바이너리 진입점.

use std::io::{self, IsTerminal};

use calcrepl::application::ports::ConfigRepository;
use calcrepl::infrastructure::adapters::JsonConfigRepository;
use calcrepl::interface::cli::Cli;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let _cli = Cli::parse_args();

    // `.env`는 이미 설정된 프로세스 환경변수를 덮어쓰지 않는다.
    let dotenv_path = dotenvy::dotenv().ok();

    let loaded = JsonConfigRepository.load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG가 없으면 설정(LOG_LEVEL 포함)의 로그 레벨을 쓴다.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(config.log_level()))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    if let Some(path) = &dotenv_path {
        debug!(path = %path.display(), "loaded .env");
    }
    if let Err(err) = &loaded {
        warn!("failed to load config, using defaults: {err:#}");
    }
    info!(env = config.env_name(), "Starting Calculator REPL");

    if let Err(err) = calcrepl::start(config) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
