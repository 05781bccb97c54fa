//! 브리지 어댑터 오류 분류.

use thiserror::Error;

/// 브리지 해석/토큰 발급/관리 호출에서 호출자에게 전파되는 오류.
///
/// 비활성 모드는 오류가 아니므로 여기에 없다.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to obtain OpenBridge auth token: {0:#}")]
    UpstreamAuth(anyhow::Error),

    #[error("failed to resolve OpenBridge bridge metadata: {0:#}")]
    UpstreamMetadata(anyhow::Error),

    #[error("OpenBridge management call failed: {0:#}")]
    UpstreamManagement(anyhow::Error),

    #[error("OpenBridge configuration error: {0}")]
    Configuration(String),

    #[error("invalid processor request: {0:#}")]
    InvalidRequest(anyhow::Error),
}
