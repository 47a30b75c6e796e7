//! 调用上下文
//! Invocation context
//!
//! 编排器随每次调用附带的显式上下文，取代开放式关键字参数
//! Explicit per-call context supplied by the orchestrator

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 调用上下文
/// Invocation context
///
/// ```rust,ignore
/// let ctx = InvocationContext::new()
///     .with_agent_name("planner")
///     .with_attribute("locale", "fr-FR");
/// let locale: Option<String> = ctx.attribute("locale");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
    /// 发起调用的 Agent
    /// Agent issuing the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    /// 会话 ID
    /// Session id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// 编排器附加属性
    /// Orchestrator-supplied attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// 设置属性，无法序列化的值会被忽略
    /// Set an attribute; values that fail to serialize are dropped
    pub fn with_attribute<T: Serialize>(mut self, key: impl Into<String>, value: T) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.attributes.insert(key.into(), v);
        }
        self
    }

    /// 获取属性
    /// Get an attribute
    pub fn attribute<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
