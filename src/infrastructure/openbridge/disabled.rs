//! 엔드포인트가 설정되지 않은 비활성 모드용 협력자.

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{BridgeApiService, BridgeAuthService};
use crate::domain::processor::{Processor, ProcessorRequest};

const NOT_CONFIGURED: &str = "openbridge: backend_url is not configured";

/// 모든 호출을 거절한다. 비활성 어댑터는 네트워크를 타지 않으므로
/// 실행 중 활성화로 바뀐 경우에만 도달한다.
pub struct UnconfiguredBridgeService;

#[async_trait]
impl BridgeAuthService for UnconfiguredBridgeService {
    async fn get_token_struct(&self, _body: &str, _authorization: &str) -> Result<Value> {
        bail!(NOT_CONFIGURED)
    }
}

#[async_trait]
impl BridgeApiService for UnconfiguredBridgeService {
    async fn get_bridge_by_id(&self, _bridge_id: &str, _token: &str) -> Result<Value> {
        bail!(NOT_CONFIGURED)
    }

    async fn add_processor(
        &self,
        _bridge_id: &str,
        _token: &str,
        _request: &ProcessorRequest,
    ) -> Result<Processor> {
        bail!(NOT_CONFIGURED)
    }

    async fn delete_processor(
        &self,
        _bridge_id: &str,
        _processor_id: &str,
        _token: &str,
    ) -> Result<()> {
        bail!(NOT_CONFIGURED)
    }
}
