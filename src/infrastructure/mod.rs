//! Infrastructure layer
//! 파일시스템 설정과 내장 명령 구현처럼 외부 세계와 맞닿은 구현체 집합.

pub mod adapters;
pub mod commands;
pub mod config;
