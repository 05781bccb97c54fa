//! Application layer
//! 브리지 어댑터 핵심 로직과 유스케이스를 정의하고 포트를 통해 인프라를 사용한다.

pub mod bridge_helper;
pub mod cache;
pub mod config;
pub mod error;
pub mod ports;
pub mod usecases;
