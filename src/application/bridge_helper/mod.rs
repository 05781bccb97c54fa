//! OpenBridge 브리지 탐색/인증 어댑터.
//!
//! 브리지 정보는 프로세스 수명 동안 한 번만 해석해 보관하고,
//! 인증 토큰은 TTL 캐시 한 슬롯에 보관한다.

mod processors;
mod resolver;
mod token;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::application::cache::TtlCache;
use crate::application::config::BridgeSettings;
use crate::application::ports::{BridgeApiService, BridgeAuthService, BridgeServices};
use crate::domain::bridge::Bridge;

pub use token::TOKEN_CACHE_KEY;

pub struct BridgeHelper {
    settings: RwLock<BridgeSettings>,
    token_cache_ttl: Duration,
    auth_service: Arc<dyn BridgeAuthService>,
    api_service: Arc<dyn BridgeApiService>,
    // None이면 아직 해석 전.
    bridge: tokio::sync::RwLock<Option<Bridge>>,
    resolving: tokio::sync::Mutex<()>,
    token_cache: TtlCache<String>,
}

impl BridgeHelper {
    pub fn new(
        settings: BridgeSettings,
        token_cache_ttl: Duration,
        auth_service: Arc<dyn BridgeAuthService>,
        api_service: Arc<dyn BridgeApiService>,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            token_cache_ttl,
            auth_service,
            api_service,
            bridge: tokio::sync::RwLock::new(None),
            resolving: tokio::sync::Mutex::new(()),
            token_cache: TtlCache::new(),
        }
    }

    pub fn with_services(
        settings: BridgeSettings,
        token_cache_ttl: Duration,
        services: BridgeServices,
    ) -> Self {
        Self::new(settings, token_cache_ttl, services.auth, services.api)
    }

    pub fn is_enabled(&self) -> bool {
        self.read_settings(|s| s.enabled)
    }

    /// 연동 활성화 여부를 바꾼다. 첫 해석 전에 호출해야 결과가 결정적이다.
    pub fn set_enabled(&self, enabled: bool) {
        self.write_settings(|s| s.enabled = enabled);
    }

    /// 조회할 브리지 id를 바꾼다. 이미 해석된 브리지는 `reset` 전까지 유지된다.
    pub fn set_bridge_id(&self, bridge_id: impl Into<String>) {
        let bridge_id = bridge_id.into();
        self.write_settings(|s| s.bridge_id = bridge_id);
    }

    pub fn bridge_id(&self) -> String {
        self.read_settings(|s| s.bridge_id.clone())
    }

    /// 보관 중인 브리지와 토큰을 버린다. 다음 호출이 다시 네트워크를 탄다.
    pub async fn reset(&self) {
        let _guard = self.resolving.lock().await;
        *self.bridge.write().await = None;
        self.token_cache.clear().await;
        tracing::debug!("OpenBridge state reset");
    }

    fn settings_snapshot(&self) -> BridgeSettings {
        self.read_settings(BridgeSettings::clone)
    }

    fn read_settings<T>(&self, f: impl FnOnce(&BridgeSettings) -> T) -> T {
        let guard = self.settings.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    fn write_settings(&self, f: impl FnOnce(&mut BridgeSettings)) {
        let mut guard = self.settings.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
    }
}
