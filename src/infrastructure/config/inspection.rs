//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::{resolve_kc_pass, resolve_token_pass};
use crate::application::config::OpenBridgeConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub ob: OpenBridgeInspection,
}

/// 비밀값은 출처만 노출한다.
#[derive(Debug, Clone, Serialize)]
pub struct OpenBridgeInspection {
    pub enabled: bool,
    pub bridge_uuid: Option<String>,
    pub backend_url: Option<String>,
    pub token_url: Option<String>,
    pub kc_user: Option<String>,
    pub kc_pass_source: Option<String>,
    pub kc_pass_resolved: bool,
    pub token_user: Option<String>,
    pub token_pass_source: Option<String>,
    pub token_pass_resolved: bool,
    pub token_cache_ttl_secs: Option<u64>,
    pub http_timeout_ms: u64,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            ob: OpenBridgeInspection::from_config(&loaded.config.ob),
        }
    }
}

impl OpenBridgeInspection {
    fn from_config(cfg: &OpenBridgeConfig) -> Self {
        let kc_pass = resolve_kc_pass(cfg);
        let token_pass = resolve_token_pass(cfg);

        Self {
            enabled: cfg.is_enabled(),
            bridge_uuid: cfg.bridge_uuid.clone(),
            backend_url: cfg.backend_url(),
            token_url: cfg.token_url(),
            kc_user: cfg.kc_user.clone(),
            kc_pass_source: kc_pass.source,
            kc_pass_resolved: kc_pass.value.is_some(),
            token_user: cfg.token_user.clone(),
            token_pass_source: token_pass.source,
            token_pass_resolved: token_pass.value.is_some(),
            token_cache_ttl_secs: cfg.token_cache_ttl_secs,
            http_timeout_ms: cfg.http_timeout().as_millis() as u64,
        }
    }
}
