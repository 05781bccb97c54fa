//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::connect_bridge::ConnectBridgeUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    EnvCredentialResolver, HttpBridgeServiceFactory, JsonConfigRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    credential_resolver: EnvCredentialResolver,
    service_factory: HttpBridgeServiceFactory,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            credential_resolver: EnvCredentialResolver,
            service_factory: HttpBridgeServiceFactory,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 브리지 어댑터 조립 유스케이스를 생성한다.
    pub fn connect_bridge_usecase(&self) -> ConnectBridgeUseCase<'_> {
        ConnectBridgeUseCase {
            config_repo: &self.config_repo,
            credential_resolver: &self.credential_resolver,
            service_factory: &self.service_factory,
        }
    }
}
