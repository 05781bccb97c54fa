//! 브리지 정보의 지연 해석/보관.

use tracing::{debug, info};

use super::BridgeHelper;
use crate::application::error::BridgeError;
use crate::domain::bridge::Bridge;

impl BridgeHelper {
    /// 현재 브리지를 돌려준다.
    ///
    /// - 비활성: 네트워크 없이 고정 브리지.
    /// - 첫 호출: 토큰 발급 → 메타데이터 조회 → endpoint 정규화 → 보관.
    /// - 이후: 보관 값. 동시에 들어온 첫 호출들은 한 번의 조회 결과를 공유한다.
    ///
    /// 토큰/메타데이터 실패는 그대로 전파되고 아무것도 보관하지 않는다.
    pub async fn bridge(&self) -> Result<Bridge, BridgeError> {
        if !self.is_enabled() {
            return Ok(Bridge::disabled());
        }

        if let Some(bridge) = self.bridge.read().await.as_ref() {
            return Ok(bridge.clone());
        }

        let _guard = self.resolving.lock().await;
        // 락 대기 중 다른 호출이 이미 해석했을 수 있다.
        if let Some(bridge) = self.bridge.read().await.as_ref() {
            debug!(bridge_id = %bridge.id, "bridge resolved by a concurrent caller");
            return Ok(bridge.clone());
        }

        let bridge = self.fetch_bridge().await?;
        *self.bridge.write().await = Some(bridge.clone());
        info!(
            bridge_id = %bridge.id,
            endpoint = %bridge.endpoint,
            name = %bridge.name,
            "resolved OpenBridge bridge"
        );
        Ok(bridge)
    }

    /// 해석이 끝났다면 보관된 브리지를 네트워크 없이 돌려준다.
    pub async fn resolved_bridge(&self) -> Option<Bridge> {
        self.bridge.read().await.clone()
    }

    async fn fetch_bridge(&self) -> Result<Bridge, BridgeError> {
        let bridge_id = self.bridge_id();
        if bridge_id.trim().is_empty() {
            return Err(BridgeError::Configuration(
                "bridge id (ob.bridge_uuid) is not set".to_string(),
            ));
        }

        let token = self.fetch_token().await?;

        debug!(%bridge_id, "fetching bridge metadata");
        let metadata = self
            .api_service
            .get_bridge_by_id(&bridge_id, &token)
            .await
            .map_err(BridgeError::UpstreamMetadata)?;

        Bridge::from_metadata(&metadata).map_err(BridgeError::UpstreamMetadata)
    }
}
