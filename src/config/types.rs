//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::cue::AddressPolicy;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// OSC 目标配置
    #[serde(default)]
    pub osc: OscConfig,

    /// Webhook 配置
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4888
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取 webhook 的公开访问地址（用于启动日志）
    pub fn webhook_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}/webhook", host, self.port)
    }
}

/// OSC 目标配置（QLab）
#[derive(Debug, Clone, Deserialize)]
pub struct OscConfig {
    /// 目标主机
    #[serde(default = "default_osc_host")]
    pub host: String,

    /// 目标端口，QLab 默认 53000
    #[serde(default = "default_osc_port")]
    pub port: u16,

    /// QLab OSC 密码，为空表示不认证
    #[serde(default)]
    pub password: String,

    /// 认证消息地址
    #[serde(default = "default_connect_address")]
    pub connect_address: String,
}

fn default_osc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_osc_port() -> u16 {
    53000
}

fn default_connect_address() -> String {
    "/connect".to_string()
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            host: default_osc_host(),
            port: default_osc_port(),
            password: String::new(),
            connect_address: default_connect_address(),
        }
    }
}

impl OscConfig {
    /// 是否启用认证
    pub fn auth_enabled(&self) -> bool {
        !self.password.is_empty()
    }

    /// 认证密码，未配置时返回 None
    pub fn password(&self) -> Option<&str> {
        if self.auth_enabled() {
            Some(&self.password)
        } else {
            None
        }
    }

    /// 目标地址（host:port）
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Webhook 配置
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// 地址校验策略
    /// 可选: passthrough, strict
    #[serde(default)]
    pub address_policy: AddressPolicy,

    /// 默认 cue 编号
    #[serde(default = "default_cue_id")]
    pub default_cue_id: String,

    /// 默认动作
    #[serde(default = "default_action")]
    pub default_action: String,
}

fn default_cue_id() -> String {
    "1".to_string()
}

fn default_action() -> String {
    "start".to_string()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            address_policy: AddressPolicy::default(),
            default_cue_id: default_cue_id(),
            default_action: default_action(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4888);
        assert_eq!(config.osc.host, "127.0.0.1");
        assert_eq!(config.osc.port, 53000);
        assert_eq!(config.osc.connect_address, "/connect");
        assert_eq!(config.webhook.address_policy, AddressPolicy::Passthrough);
        assert_eq!(config.webhook.default_cue_id, "1");
        assert_eq!(config.webhook.default_action, "start");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:4888");
        assert_eq!(config.webhook_url(), "http://localhost:4888/webhook");
    }

    #[test]
    fn test_auth_disabled_without_password() {
        let config = OscConfig::default();
        assert!(!config.auth_enabled());
        assert_eq!(config.password(), None);
    }

    #[test]
    fn test_auth_enabled_with_password() {
        let config = OscConfig {
            password: "4012".to_string(),
            ..Default::default()
        };
        assert!(config.auth_enabled());
        assert_eq!(config.password(), Some("4012"));
        assert_eq!(config.target(), "127.0.0.1:53000");
    }
}
