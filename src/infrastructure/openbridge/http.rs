//! OpenBridge HTTP 호출 공용 유틸리티.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

/// 설정된 타임아웃을 적용한 HTTP 클라이언트를 생성한다.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("oblink/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("openbridge: failed to build HTTP client")
}

/// 요청을 보내고 2xx가 아니면 상태/본문을 담은 오류로 바꾼다.
pub async fn send_checked(action: &str, request: RequestBuilder) -> Result<Response> {
    let response = request
        .send()
        .await
        .with_context(|| format!("openbridge: failed to {action}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("openbridge: {action} failed ({status}): {body}");
    }

    Ok(response)
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 표준화한다.
pub async fn send_json(action: &str, request: RequestBuilder) -> Result<Value> {
    let response = send_checked(action, request).await?;
    let body = response
        .text()
        .await
        .with_context(|| format!("openbridge: failed to read {action} response body"))?;

    serde_json::from_str(&body)
        .with_context(|| format!("openbridge: invalid JSON response while {action}"))
}
