//! 브리지 관리 API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use super::http::{send_checked, send_json};
use crate::application::ports::BridgeApiService;
use crate::domain::processor::{Processor, ProcessorRequest};

// RFC 3986 unreserved 문자만 그대로 둔다.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub struct HttpBridgeApiService {
    client: Client,
    api_base: String,
}

impl HttpBridgeApiService {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn bridge_endpoint(&self, bridge_id: &str) -> String {
        format!("{}/api/v1/bridges/{}", self.api_base, segment(bridge_id))
    }

    fn processors_endpoint(&self, bridge_id: &str) -> String {
        format!("{}/processors", self.bridge_endpoint(bridge_id))
    }

    fn processor_endpoint(&self, bridge_id: &str, processor_id: &str) -> String {
        format!(
            "{}/{}",
            self.processors_endpoint(bridge_id),
            segment(processor_id)
        )
    }

    fn request(&self, method: Method, url: String, token: &str) -> RequestBuilder {
        // token은 이미 `Bearer ...` 형태의 헤더 값이다.
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, token)
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

#[async_trait]
impl BridgeApiService for HttpBridgeApiService {
    async fn get_bridge_by_id(&self, bridge_id: &str, token: &str) -> Result<Value> {
        let req = self.request(Method::GET, self.bridge_endpoint(bridge_id), token);
        send_json("fetch bridge", req).await
    }

    async fn add_processor(
        &self,
        bridge_id: &str,
        token: &str,
        request: &ProcessorRequest,
    ) -> Result<Processor> {
        let req = self
            .request(Method::POST, self.processors_endpoint(bridge_id), token)
            .json(request);
        let value = send_json("create processor", req).await?;
        serde_json::from_value(value).context("openbridge: invalid processor JSON")
    }

    async fn delete_processor(
        &self,
        bridge_id: &str,
        processor_id: &str,
        token: &str,
    ) -> Result<()> {
        let req = self.request(
            Method::DELETE,
            self.processor_endpoint(bridge_id, processor_id),
            token,
        );
        send_checked("delete processor", req).await?;
        Ok(())
    }
}
