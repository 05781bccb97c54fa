//! 설정을 읽어 브리지 어댑터를 조립하는 유스케이스.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::application::bridge_helper::BridgeHelper;
use crate::application::ports::{BridgeServiceFactory, ConfigRepository, CredentialResolver};

/// 활성화 여부/브리지 id를 실행 시점에 덮어쓰는 값.
#[derive(Debug, Clone, Default)]
pub struct BridgeOverrides {
    pub enabled: Option<bool>,
    pub bridge_id: Option<String>,
}

pub struct ConnectBridgeUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub credential_resolver: &'a dyn CredentialResolver,
    pub service_factory: &'a dyn BridgeServiceFactory,
}

impl<'a> ConnectBridgeUseCase<'a> {
    /// 설정 로딩 → 비밀값 해석 → HTTP 협력자 생성 → 어댑터 생성.
    /// 활성 상태라면 필수 자격 증명과 토큰 캐시 TTL이 모두 있어야 한다.
    pub fn execute(&self, overrides: &BridgeOverrides) -> Result<BridgeHelper> {
        let config = self.config_repo.load()?;
        let mut ob = config.ob;
        if let Some(enabled) = overrides.enabled {
            ob.enabled = Some(enabled);
        }
        if let Some(bridge_id) = &overrides.bridge_id {
            ob.bridge_uuid = Some(bridge_id.clone());
        }

        let settings = self.credential_resolver.resolve(&ob)?;
        let ttl = ob.token_cache_ttl();

        if settings.enabled {
            let missing = settings.missing_fields();
            if !missing.is_empty() {
                bail!(
                    "OpenBridge is enabled but these settings are missing: {}",
                    missing.join(", ")
                );
            }
            if ttl.is_none() {
                bail!("OpenBridge is enabled but ob.token_cache_ttl_secs is not set");
            }
        }

        let services = self.service_factory.build(&ob)?;
        // 비활성 상태의 토큰은 쓰이지 않으므로 TTL이 없으면 캐시하지 않는다.
        let ttl = ttl.unwrap_or(Duration::ZERO);

        tracing::debug!(
            enabled = settings.enabled,
            bridge_id = %settings.bridge_id,
            "OpenBridge adapter ready"
        );
        Ok(BridgeHelper::with_services(settings, ttl, services))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::bail;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::config::{BridgeSettings, Config, OpenBridgeConfig};
    use crate::application::ports::{BridgeApiService, BridgeAuthService, BridgeServices};
    use crate::domain::bridge::Bridge;
    use crate::domain::processor::{Processor, ProcessorRequest};

    struct FixedConfig(Config);

    impl ConfigRepository for FixedConfig {
        fn load(&self) -> Result<Config> {
            Ok(self.0.clone())
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            Ok(serde_json::to_string_pretty(&self.0)?)
        }
    }

    struct InlineCredentials;

    impl CredentialResolver for InlineCredentials {
        fn resolve(&self, cfg: &OpenBridgeConfig) -> Result<BridgeSettings> {
            Ok(BridgeSettings {
                enabled: cfg.is_enabled(),
                kc_user: cfg.kc_user.clone().unwrap_or_default(),
                kc_pass: cfg.kc_pass.clone().unwrap_or_default(),
                bridge_id: cfg.bridge_uuid.clone().unwrap_or_default(),
                token_user: cfg.token_user.clone().unwrap_or_default(),
                token_pass: cfg.token_pass.clone().unwrap_or_default(),
            })
        }
    }

    struct StubServices;

    #[async_trait]
    impl BridgeAuthService for StubServices {
        async fn get_token_struct(&self, _body: &str, _authorization: &str) -> Result<Value> {
            Ok(json!({ "access_token": "stub" }))
        }
    }

    #[async_trait]
    impl BridgeApiService for StubServices {
        async fn get_bridge_by_id(&self, bridge_id: &str, _token: &str) -> Result<Value> {
            Ok(json!({ "id": bridge_id, "endpoint": "http://stub/events", "name": "stub" }))
        }

        async fn add_processor(
            &self,
            _bridge_id: &str,
            _token: &str,
            _request: &ProcessorRequest,
        ) -> Result<Processor> {
            bail!("not used")
        }

        async fn delete_processor(
            &self,
            _bridge_id: &str,
            _processor_id: &str,
            _token: &str,
        ) -> Result<()> {
            bail!("not used")
        }
    }

    struct StubFactory;

    impl BridgeServiceFactory for StubFactory {
        fn build(&self, _cfg: &OpenBridgeConfig) -> Result<BridgeServices> {
            let stub = Arc::new(StubServices);
            Ok(BridgeServices {
                auth: stub.clone(),
                api: stub,
            })
        }
    }

    fn enabled_config() -> OpenBridgeConfig {
        OpenBridgeConfig {
            enabled: Some(true),
            kc_user: Some("kc".into()),
            kc_pass: Some("kcpass".into()),
            bridge_uuid: Some("b-1".into()),
            token_user: Some("svc".into()),
            token_pass: Some("svcpass".into()),
            token_cache_ttl_secs: Some(60),
            ..Default::default()
        }
    }

    fn connect(ob: OpenBridgeConfig, overrides: &BridgeOverrides) -> Result<BridgeHelper> {
        let repo = FixedConfig(Config { ob });
        ConnectBridgeUseCase {
            config_repo: &repo,
            credential_resolver: &InlineCredentials,
            service_factory: &StubFactory,
        }
        .execute(overrides)
    }

    #[tokio::test]
    async fn builds_enabled_adapter() {
        let helper = connect(enabled_config(), &BridgeOverrides::default()).unwrap();
        assert_eq!(
            helper.bridge().await.unwrap(),
            Bridge::new("b-1", "http://stub", "stub")
        );
    }

    #[test]
    fn enabled_without_ttl_is_rejected() {
        let ob = OpenBridgeConfig {
            token_cache_ttl_secs: None,
            ..enabled_config()
        };
        let err = connect(ob, &BridgeOverrides::default()).err().unwrap();
        assert!(err.to_string().contains("token_cache_ttl_secs"));
    }

    #[test]
    fn enabled_without_credentials_lists_missing_fields() {
        let ob = OpenBridgeConfig {
            enabled: Some(true),
            token_cache_ttl_secs: Some(60),
            ..Default::default()
        };
        let err = connect(ob, &BridgeOverrides::default()).err().unwrap();
        assert!(err.to_string().contains("kc_user"));
        assert!(err.to_string().contains("token_pass"));
    }

    #[tokio::test]
    async fn disabled_config_needs_nothing() {
        let helper = connect(OpenBridgeConfig::default(), &BridgeOverrides::default()).unwrap();
        assert!(!helper.is_enabled());
        assert!(helper.bridge().await.unwrap().is_disabled());
    }

    #[tokio::test]
    async fn overrides_take_precedence_over_config() {
        let overrides = BridgeOverrides {
            enabled: Some(true),
            bridge_id: Some("b-7".into()),
        };
        let ob = OpenBridgeConfig {
            enabled: Some(false),
            ..enabled_config()
        };

        let helper = connect(ob, &overrides).unwrap();
        assert_eq!(helper.bridge_id(), "b-7");
        assert_eq!(helper.bridge().await.unwrap().id, "b-7");
    }
}
