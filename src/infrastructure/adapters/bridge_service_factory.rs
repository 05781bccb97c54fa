//! 브리지 HTTP 협력자 팩토리 포트 구현.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use url::Url;

use crate::application::config::OpenBridgeConfig;
use crate::application::ports::{BridgeServiceFactory, BridgeServices};
use crate::infrastructure::openbridge::http::build_client;
use crate::infrastructure::openbridge::{
    HttpBridgeApiService, HttpBridgeAuthService, UnconfiguredBridgeService,
};

/// 설정된 URL/타임아웃으로 reqwest 기반 구현체를 만든다.
pub struct HttpBridgeServiceFactory;

impl BridgeServiceFactory for HttpBridgeServiceFactory {
    fn build(&self, cfg: &OpenBridgeConfig) -> Result<BridgeServices> {
        let Some(backend_url) = cfg.backend_url() else {
            if cfg.is_enabled() {
                bail!("OpenBridge is enabled but ob.backend_url is not set");
            }
            // 비활성 + 미설정: 네트워크를 탈 일이 없다.
            let unconfigured = Arc::new(UnconfiguredBridgeService);
            return Ok(BridgeServices {
                auth: unconfigured.clone(),
                api: unconfigured,
            });
        };

        let token_url = cfg
            .token_url()
            .context("OpenBridge token endpoint is not configured")?;
        validate_url("ob.backend_url", &backend_url)?;
        validate_url("ob.token_url", &token_url)?;

        // 두 협력자가 커넥션 풀을 공유한다.
        let client = build_client(cfg.http_timeout())?;
        Ok(BridgeServices {
            auth: Arc::new(HttpBridgeAuthService::new(client.clone(), token_url)),
            api: Arc::new(HttpBridgeApiService::new(client, backend_url)),
        })
    }
}

fn validate_url(key: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("{key} is not a valid URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{key} must be an http(s) URL: {raw}");
    }
    Ok(())
}
