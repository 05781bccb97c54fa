//! 브리지 관리 API의 processor 값 객체.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// processor 생성 요청 본문.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorRequest {
    pub name: String,
    pub action: ProcessorAction,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ProcessorFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorFilter {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: String,
    pub value: String,
}

/// 관리 API가 돌려주는 processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ProcessorRequest {
    pub fn new(name: impl Into<String>, action_kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: ProcessorAction {
                kind: action_kind.into(),
                parameters: BTreeMap::new(),
            },
            filters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.action.parameters.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("processor name must not be empty");
        }
        if self.action.kind.trim().is_empty() {
            bail!("processor action type must not be empty");
        }
        Ok(())
    }
}

/// `key=value` 형태의 CLI 인자를 파라미터 쌍으로 나눈다.
pub fn parse_parameter(raw: &str) -> Result<(String, String)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("invalid parameter `{raw}` (expected key=value)");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("invalid parameter `{raw}` (empty key)");
    }
    Ok((key.to_string(), value.to_string()))
}
