//! 토큰 발급과 캐시.

use anyhow::anyhow;
use serde_json::Value;
use tracing::{debug, warn};

use super::BridgeHelper;
use crate::application::error::BridgeError;
use crate::domain::bridge::{AuthToken, basic_auth_header, bearer, password_grant_body};

/// 토큰은 자격 증명과 무관하게 이 키 하나에만 보관된다.
pub const TOKEN_CACHE_KEY: &str = "kc-cache";

impl BridgeHelper {
    /// 호출자에게 오류를 돌려주지 않는 토큰 조회.
    /// 발급 실패 시 경고를 남기고 대체 토큰을 돌려주며, 다음 호출이 재시도한다.
    pub async fn auth_token(&self) -> AuthToken {
        if !self.is_enabled() {
            return AuthToken::disabled();
        }

        match self.fetch_token().await {
            Ok(token) => AuthToken::new(token),
            Err(err) => {
                warn!("Failed to get an auth token: {err}");
                AuthToken::unavailable()
            }
        }
    }

    /// `Bearer <access_token>`을 돌려준다. 캐시 유효 기간 안에서는 재요청하지 않는다.
    /// 활성화 여부를 보지 않으며, 실패는 그대로 전파된다.
    pub async fn fetch_token(&self) -> Result<String, BridgeError> {
        self.token_cache
            .get_or_try_insert_with(TOKEN_CACHE_KEY, self.token_cache_ttl, || {
                self.request_token()
            })
            .await
    }

    async fn request_token(&self) -> Result<String, BridgeError> {
        let settings = self.settings_snapshot();
        let authorization = basic_auth_header(&settings.kc_user, &settings.kc_pass);
        let body = password_grant_body(&settings.token_user, &settings.token_pass);

        debug!(user = %settings.token_user, "requesting OpenBridge token");
        let response = self
            .auth_service
            .get_token_struct(&body, &authorization)
            .await
            .map_err(BridgeError::UpstreamAuth)?;

        let access_token = response
            .get("access_token")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                BridgeError::UpstreamAuth(anyhow!("token response has no `access_token`"))
            })?;

        Ok(bearer(access_token))
    }
}
