//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TOKEN_PATH: &str = "/auth/realms/event-bridge-fm/protocol/openid-connect/token";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// OpenBridge 연동 설정
    #[serde(default)]
    pub ob: OpenBridgeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OpenBridgeConfig {
    /// 연동 활성화 여부(기본 false)
    pub enabled: Option<bool>,
    /// 토큰 엔드포인트 Basic 인증 사용자
    pub kc_user: Option<String>,
    /// 토큰 엔드포인트 Basic 인증 비밀번호(직접값)
    pub kc_pass: Option<String>,
    /// Basic 인증 비밀번호를 읽을 환경변수 이름
    pub kc_pass_env: Option<String>,
    /// 조회할 브리지 UUID
    pub bridge_uuid: Option<String>,
    /// password grant 사용자
    pub token_user: Option<String>,
    /// password grant 비밀번호(직접값)
    pub token_pass: Option<String>,
    /// password grant 비밀번호를 읽을 환경변수 이름
    pub token_pass_env: Option<String>,
    /// 브리지 관리 API base URL
    pub backend_url: Option<String>,
    /// 토큰 엔드포인트 URL override(미지정 시 backend_url에서 유도)
    pub token_url: Option<String>,
    /// 토큰 캐시 유지 시간(초). 기본값 없음.
    pub token_cache_ttl_secs: Option<u64>,
    /// HTTP 요청 타임아웃(ms)
    pub http_timeout_ms: Option<u64>,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.ob.merge_from(other.ob);
    }
}

impl OpenBridgeConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn backend_url(&self) -> Option<String> {
        self.backend_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
    }

    /// 토큰 엔드포인트는 `token_url` 우선, 없으면 backend_url + 기본 경로.
    pub fn token_url(&self) -> Option<String> {
        if let Some(url) = self
            .token_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return Some(url.to_string());
        }
        self.backend_url()
            .map(|base| format!("{base}{DEFAULT_TOKEN_PATH}"))
    }

    pub fn token_cache_ttl(&self) -> Option<Duration> {
        self.token_cache_ttl_secs.map(Duration::from_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS))
    }

    pub fn merge_from(&mut self, other: OpenBridgeConfig) {
        merge_opt(&mut self.enabled, other.enabled);
        merge_opt(&mut self.kc_user, other.kc_user);
        merge_opt(&mut self.kc_pass, other.kc_pass);
        merge_opt(&mut self.kc_pass_env, other.kc_pass_env);
        merge_opt(&mut self.bridge_uuid, other.bridge_uuid);
        merge_opt(&mut self.token_user, other.token_user);
        merge_opt(&mut self.token_pass, other.token_pass);
        merge_opt(&mut self.token_pass_env, other.token_pass_env);
        merge_opt(&mut self.backend_url, other.backend_url);
        merge_opt(&mut self.token_url, other.token_url);
        merge_opt(&mut self.token_cache_ttl_secs, other.token_cache_ttl_secs);
        merge_opt(&mut self.http_timeout_ms, other.http_timeout_ms);
    }
}

fn merge_opt<T>(target: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *target = incoming;
    }
}

/// 비밀값까지 해석이 끝난 런타임 설정.
#[derive(Clone, Default)]
pub struct BridgeSettings {
    pub enabled: bool,
    pub kc_user: String,
    pub kc_pass: String,
    pub bridge_id: String,
    pub token_user: String,
    pub token_pass: String,
}

impl BridgeSettings {
    /// 활성화 상태에서 비어 있으면 안 되는 항목 이름을 돌려준다.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("kc_user", &self.kc_user),
            ("kc_pass", &self.kc_pass),
            ("bridge_uuid", &self.bridge_id),
            ("token_user", &self.token_user),
            ("token_pass", &self.token_pass),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl fmt::Debug for BridgeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeSettings")
            .field("enabled", &self.enabled)
            .field("kc_user", &self.kc_user)
            .field("kc_pass", &"***")
            .field("bridge_id", &self.bridge_id)
            .field("token_user", &self.token_user)
            .field("token_pass", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override_earlier_ones() {
        let mut base: Config = serde_json::from_str(
            r#"{ "ob": { "enabled": false, "kc_user": "kc", "bridge_uuid": "b-1" } }"#,
        )
        .unwrap();
        let overlay: Config =
            serde_json::from_str(r#"{ "ob": { "enabled": true, "bridge_uuid": "b-2" } }"#)
                .unwrap();

        base.merge_from(overlay);
        assert!(base.ob.is_enabled());
        assert_eq!(base.ob.kc_user.as_deref(), Some("kc"));
        assert_eq!(base.ob.bridge_uuid.as_deref(), Some("b-2"));
    }

    #[test]
    fn disabled_by_default() {
        assert!(!Config::default().ob.is_enabled());
    }

    #[test]
    fn token_url_is_derived_from_backend() {
        let cfg = OpenBridgeConfig {
            backend_url: Some("http://ob.local:8080/".into()),
            ..Default::default()
        };
        assert_eq!(
            cfg.token_url().as_deref(),
            Some("http://ob.local:8080/auth/realms/event-bridge-fm/protocol/openid-connect/token")
        );

        let explicit = OpenBridgeConfig {
            token_url: Some("https://sso.local/token".into()),
            ..cfg
        };
        assert_eq!(explicit.token_url().as_deref(), Some("https://sso.local/token"));
    }

    #[test]
    fn ttl_has_no_default() {
        assert!(OpenBridgeConfig::default().token_cache_ttl().is_none());
        assert_eq!(
            OpenBridgeConfig::default().http_timeout(),
            Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS)
        );
    }

    #[test]
    fn reports_missing_credentials_and_hides_secrets() {
        let settings = BridgeSettings {
            enabled: true,
            kc_user: "kc".into(),
            kc_pass: "secret".into(),
            ..Default::default()
        };
        assert_eq!(
            settings.missing_fields(),
            vec!["bridge_uuid", "token_user", "token_pass"]
        );
        assert!(!format!("{settings:?}").contains("secret"));
    }
}
