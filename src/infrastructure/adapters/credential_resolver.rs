//! 자격 증명 해석 포트 구현.

use anyhow::Result;

use crate::application::config::{BridgeSettings, OpenBridgeConfig};
use crate::application::ports::CredentialResolver;
use crate::infrastructure::config::resolve_bridge_settings;

/// 설정(inline/env)에 기반해 런타임 자격 증명을 해석한다.
pub struct EnvCredentialResolver;

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self, cfg: &OpenBridgeConfig) -> Result<BridgeSettings> {
        Ok(resolve_bridge_settings(cfg))
    }
}
