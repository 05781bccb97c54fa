//! 브리지 관리 API(processor 생성/삭제).

use tracing::{debug, info};

use super::BridgeHelper;
use crate::application::error::BridgeError;
use crate::domain::processor::{Processor, ProcessorRequest};

impl BridgeHelper {
    /// 현재 브리지에 processor를 만든다. 비활성이면 아무것도 하지 않고 `None`.
    pub async fn add_processor(
        &self,
        request: &ProcessorRequest,
    ) -> Result<Option<Processor>, BridgeError> {
        if !self.is_enabled() {
            debug!(name = %request.name, "OpenBridge disabled, skipping processor creation");
            return Ok(None);
        }
        request.validate().map_err(BridgeError::InvalidRequest)?;

        let bridge = self.bridge().await?;
        let token = self.fetch_token().await?;
        let processor = self
            .api_service
            .add_processor(&bridge.id, &token, request)
            .await
            .map_err(BridgeError::UpstreamManagement)?;

        info!(bridge_id = %bridge.id, processor_id = %processor.id, "created processor");
        Ok(Some(processor))
    }

    /// 현재 브리지의 processor를 지운다. 비활성이면 아무것도 하지 않는다.
    pub async fn remove_processor(&self, processor_id: &str) -> Result<(), BridgeError> {
        if !self.is_enabled() {
            debug!(processor_id, "OpenBridge disabled, skipping processor removal");
            return Ok(());
        }
        if processor_id.trim().is_empty() {
            return Err(BridgeError::InvalidRequest(anyhow::anyhow!(
                "processor id must not be empty"
            )));
        }

        let bridge = self.bridge().await?;
        let token = self.fetch_token().await?;
        self.api_service
            .delete_processor(&bridge.id, processor_id, &token)
            .await
            .map_err(BridgeError::UpstreamManagement)?;

        info!(bridge_id = %bridge.id, processor_id, "removed processor");
        Ok(())
    }
}
