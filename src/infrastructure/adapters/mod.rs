//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod bridge_service_factory;
mod config_repository;
mod credential_resolver;

pub use bridge_service_factory::HttpBridgeServiceFactory;
pub use config_repository::JsonConfigRepository;
pub use credential_resolver::EnvCredentialResolver;
