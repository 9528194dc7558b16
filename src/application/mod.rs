//! Application layer
//! 명령 레지스트리와 디스패치 유스케이스를 정의하고 포트를 통해 인프라를 사용한다.

pub mod config;
pub mod ports;
pub mod registry;
pub mod usecases;
