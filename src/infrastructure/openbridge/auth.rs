//! 토큰 발급 엔드포인트(Keycloak password grant) 연동 구현.

use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use super::http::send_json;
use crate::application::ports::BridgeAuthService;

pub struct HttpBridgeAuthService {
    client: Client,
    token_url: String,
}

impl HttpBridgeAuthService {
    pub fn new(client: Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
        }
    }
}

#[async_trait]
impl BridgeAuthService for HttpBridgeAuthService {
    async fn get_token_struct(&self, body: &str, authorization: &str) -> Result<Value> {
        let req = self
            .client
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .body(body.to_string());

        let value = send_json("request token", req).await?;
        if !value.is_object() {
            bail!("openbridge: token response is not a JSON object");
        }
        Ok(value)
    }
}
