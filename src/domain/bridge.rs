//! OpenBridge 브리지 식별/인증 값 객체.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DISABLED_BRIDGE_ID: &str = "- OB not enabled -";
pub const DISABLED_BRIDGE_ENDPOINT: &str = "http://does.not.exist";
pub const DISABLED_BRIDGE_NAME: &str = "no name";

pub const DISABLED_TOKEN: &str = "- OB not enabled token -";
pub const UNAVAILABLE_TOKEN: &str = "- No token - obtained -";

const EVENTS_SUFFIX: &str = "/events";

// application/x-www-form-urlencoded에서 그대로 둘 수 있는 문자.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

/// 이벤트 브리지의 식별자/엔드포인트/이름.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    pub id: String,
    pub endpoint: String,
    pub name: String,
}

impl Bridge {
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            name: name.into(),
        }
    }

    /// 연동 비활성 상태에서 돌려주는 고정 브리지.
    pub fn disabled() -> Self {
        Self::new(
            DISABLED_BRIDGE_ID,
            DISABLED_BRIDGE_ENDPOINT,
            DISABLED_BRIDGE_NAME,
        )
    }

    pub fn is_disabled(&self) -> bool {
        self.id == DISABLED_BRIDGE_ID
    }

    /// 브리지 메타데이터 응답에서 `id`/`endpoint`/`name`을 꺼낸다.
    /// endpoint는 저장 전에 정규화된다.
    pub fn from_metadata(metadata: &Value) -> Result<Self> {
        let id = string_field(metadata, "id")?;
        let endpoint = string_field(metadata, "endpoint")?;
        let name = string_field(metadata, "name")?;

        Ok(Self {
            id,
            endpoint: normalize_endpoint(&endpoint),
            name,
        })
    }
}

fn string_field(metadata: &Value, key: &str) -> Result<String> {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .with_context(|| format!("bridge metadata is missing string field `{key}`"))
}

/// 끝이 `/events`인 endpoint에서 마지막 세그먼트를 떼어낸다.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if !endpoint.ends_with(EVENTS_SUFFIX) {
        return endpoint.to_string();
    }

    match endpoint.rfind('/') {
        Some(idx) => endpoint[..idx].to_string(),
        None => endpoint.to_string(),
    }
}

/// `Authorization` 헤더 값으로 그대로 쓰이는 인증 토큰.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn disabled() -> Self {
        Self::new(DISABLED_TOKEN)
    }

    /// 토큰 발급에 실패했을 때의 대체값.
    pub fn unavailable() -> Self {
        Self::new(UNAVAILABLE_TOKEN)
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == DISABLED_TOKEN || self.0 == UNAVAILABLE_TOKEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// `user:pass`를 Base64로 인코딩한 Basic 인증 헤더.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{username}:{password}").as_bytes());
    format!("Basic {encoded}")
}

/// password grant 요청 본문(`username=..&password=..&grant_type=password`).
pub fn password_grant_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}&grant_type=password",
        utf8_percent_encode(username, FORM_VALUE),
        utf8_percent_encode(password, FORM_VALUE)
    )
}
