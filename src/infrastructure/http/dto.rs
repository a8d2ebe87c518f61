//! Data Transfer Objects

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::application::{TriggerCue, TriggerCueResponse};
use crate::config::WebhookConfig;
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// Webhook 请求
// ============================================================================

/// webhook 中提取出的字段，缺省值在 `into_command` 时填充
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookFields {
    pub cue_id: Option<String>,
    pub action: Option<String>,
}

impl WebhookFields {
    /// 从 URL 查询参数提取（GET）
    pub fn from_query(mut params: HashMap<String, String>) -> Self {
        Self {
            cue_id: params.remove("cue_id"),
            action: params.remove("action"),
        }
    }

    /// 从 JSON 请求体提取（POST）
    ///
    /// - 空请求体或 `null` 视为全部缺省
    /// - 字符串原样使用，数字按 JSON 文本转换
    /// - 其他类型报错
    pub fn from_json_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| ApiError::BadPayload(e.to_string()))?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self {
                cue_id: string_field(&map, "cue_id")?,
                action: string_field(&map, "action")?,
            }),
            other => Err(ApiError::BadPayload(format!(
                "Webhook payload must be a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// 应用默认值，生成命令
    pub fn into_command(self, defaults: &WebhookConfig) -> TriggerCue {
        TriggerCue {
            cue_id: self
                .cue_id
                .unwrap_or_else(|| defaults.default_cue_id.clone()),
            action: self
                .action
                .unwrap_or_else(|| defaults.default_action.clone()),
        }
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Result<Option<String>, ApiError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(ApiError::BadPayload(format!(
            "Field '{}' must be a string or number, got {}",
            key,
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// 响应
// ============================================================================

/// webhook 响应（成功与失败共用）
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl WebhookResponse {
    pub fn success(result: TriggerCueResponse) -> Self {
        Self {
            status: "success",
            message: format!("Sent OSC command: {}", result.address),
            cue_id: Some(result.cue_id),
            action: Some(result.action),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            cue_id: None,
            action: None,
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 服务说明（GET /）
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub endpoints: EndpointsInfo,
    pub webhook_format: WebhookFormatInfo,
    pub qlab_settings: QlabSettingsInfo,
}

#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    #[serde(rename = "POST /webhook")]
    pub post_webhook: &'static str,
    #[serde(rename = "GET /webhook")]
    pub get_webhook: &'static str,
    #[serde(rename = "GET /health")]
    pub health: &'static str,
    #[serde(rename = "GET /")]
    pub root: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebhookFormatInfo {
    pub cue_id: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct QlabSettingsInfo {
    pub host: String,
    pub port: u16,
    pub authentication: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_fields() {
        let params = HashMap::from([
            ("cue_id".to_string(), "3".to_string()),
            ("extra".to_string(), "ignored".to_string()),
        ]);
        let fields = WebhookFields::from_query(params);
        assert_eq!(fields.cue_id.as_deref(), Some("3"));
        assert_eq!(fields.action, None);
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        let command = WebhookFields::from_json_body(b"")
            .unwrap()
            .into_command(&WebhookConfig::default());
        assert_eq!(command.cue_id, "1");
        assert_eq!(command.action, "start");
    }

    #[test]
    fn test_null_body_uses_defaults() {
        let fields = WebhookFields::from_json_body(b"null").unwrap();
        assert_eq!(fields, WebhookFields::default());
    }

    #[test]
    fn test_numeric_cue_id() {
        let fields = WebhookFields::from_json_body(br#"{"cue_id": 7, "action": null}"#).unwrap();
        assert_eq!(fields.cue_id.as_deref(), Some("7"));
        assert_eq!(fields.action, None);
    }

    #[test]
    fn test_rejects_non_object_body() {
        let err = WebhookFields::from_json_body(b"[1, 2]").unwrap_err();
        assert!(matches!(err, ApiError::BadPayload(msg) if msg.contains("array")));
    }

    #[test]
    fn test_rejects_bool_field() {
        let err = WebhookFields::from_json_body(br#"{"action": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::BadPayload(msg) if msg.contains("'action'")));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(WebhookFields::from_json_body(b"{cue_id:").is_err());
    }

    #[test]
    fn test_success_message() {
        let response = WebhookResponse::success(TriggerCueResponse {
            cue_id: "7".to_string(),
            action: "stop".to_string(),
            address: "/cue/7/stop".to_string(),
        });
        assert_eq!(response.status, "success");
        assert_eq!(response.message, "Sent OSC command: /cue/7/stop");
    }
}
