//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::application::config::{BridgeSettings, Config, OpenBridgeConfig};
use crate::domain::processor::{Processor, ProcessorRequest};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 설정의 비밀값(inline/env)을 런타임 값으로 해석하는 포트.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, cfg: &OpenBridgeConfig) -> Result<BridgeSettings>;
}

/// 토큰 발급 엔드포인트 포트.
#[async_trait]
pub trait BridgeAuthService: Send + Sync {
    /// form body와 `Authorization` 헤더로 토큰을 요청하고 응답 구조를 그대로 돌려준다.
    async fn get_token_struct(&self, body: &str, authorization: &str) -> Result<Value>;
}

/// 브리지 메타데이터/관리 API 포트.
#[async_trait]
pub trait BridgeApiService: Send + Sync {
    async fn get_bridge_by_id(&self, bridge_id: &str, token: &str) -> Result<Value>;
    async fn add_processor(
        &self,
        bridge_id: &str,
        token: &str,
        request: &ProcessorRequest,
    ) -> Result<Processor>;
    async fn delete_processor(&self, bridge_id: &str, processor_id: &str, token: &str)
    -> Result<()>;
}

/// 한 쌍의 HTTP 협력자 핸들.
#[derive(Clone)]
pub struct BridgeServices {
    pub auth: Arc<dyn BridgeAuthService>,
    pub api: Arc<dyn BridgeApiService>,
}

/// 설정에 맞는 협력자 구현체를 생성하는 팩토리 포트.
pub trait BridgeServiceFactory: Send + Sync {
    fn build(&self, cfg: &OpenBridgeConfig) -> Result<BridgeServices>;
}
