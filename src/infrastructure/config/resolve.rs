//! 설정 비밀값(inline/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::{BridgeSettings, OpenBridgeConfig};

/// 비밀값 해석 결과. 값과 출처 라벨을 함께 담는다.
#[derive(Debug, Clone, Default)]
pub struct SecretResolution {
    pub value: Option<String>,
    pub source: Option<String>,
}

/// `inline` 값이 우선이고, 없으면 `env_name` 환경변수를 읽는다.
pub fn resolve_secret(inline: Option<&str>, env_name: Option<&str>) -> SecretResolution {
    if let Some(value) = inline.map(str::trim).filter(|v| !v.is_empty()) {
        return SecretResolution {
            value: Some(value.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let Some(env_name) = env_name.map(str::trim).filter(|v| !v.is_empty()) else {
        return SecretResolution::default();
    };

    match env::var(env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => SecretResolution {
            value: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => SecretResolution {
            value: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}

pub fn resolve_kc_pass(cfg: &OpenBridgeConfig) -> SecretResolution {
    resolve_secret(cfg.kc_pass.as_deref(), cfg.kc_pass_env.as_deref())
}

pub fn resolve_token_pass(cfg: &OpenBridgeConfig) -> SecretResolution {
    resolve_secret(cfg.token_pass.as_deref(), cfg.token_pass_env.as_deref())
}

/// 설정을 어댑터용 런타임 값으로 바꾼다. 없는 값은 빈 문자열로 둔다.
pub fn resolve_bridge_settings(cfg: &OpenBridgeConfig) -> BridgeSettings {
    BridgeSettings {
        enabled: cfg.is_enabled(),
        kc_user: plain(cfg.kc_user.as_deref()),
        kc_pass: resolve_kc_pass(cfg).value.unwrap_or_default(),
        bridge_id: plain(cfg.bridge_uuid.as_deref()),
        token_user: plain(cfg.token_user.as_deref()),
        token_pass: resolve_token_pass(cfg).value.unwrap_or_default(),
    }
}

fn plain(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_value_wins_over_env() {
        let r = resolve_secret(Some(" secret "), Some("PATH"));
        assert_eq!(r.value.as_deref(), Some("secret"));
        assert_eq!(r.source.as_deref(), Some("inline"));
    }

    #[test]
    fn reads_env_and_reports_missing_env() {
        // PATH는 테스트 환경에서 항상 존재한다.
        let found = resolve_secret(None, Some("PATH"));
        assert!(found.value.is_some());
        assert_eq!(found.source.as_deref(), Some("env:PATH"));

        let missing = resolve_secret(None, Some("OBLINK_TEST_SURELY_UNSET_VAR"));
        assert!(missing.value.is_none());
        assert_eq!(
            missing.source.as_deref(),
            Some("env:OBLINK_TEST_SURELY_UNSET_VAR (missing)")
        );

        let none = resolve_secret(Some("  "), None);
        assert!(none.value.is_none() && none.source.is_none());
    }

    #[test]
    fn builds_settings_from_config() {
        let cfg = OpenBridgeConfig {
            enabled: Some(true),
            kc_user: Some("kc".into()),
            kc_pass: Some("kcpass".into()),
            bridge_uuid: Some(" b-1 ".into()),
            token_user: Some("svc".into()),
            token_pass: Some("svcpass".into()),
            ..Default::default()
        };

        let settings = resolve_bridge_settings(&cfg);
        assert!(settings.enabled);
        assert_eq!(settings.bridge_id, "b-1");
        assert_eq!(settings.kc_pass, "kcpass");
        assert!(settings.missing_fields().is_empty());
    }
}
