//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CUE_BRIDGE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CUE_BRIDGE_SERVER__PORT=4888`
/// - `CUE_BRIDGE_OSC__HOST=192.168.1.20`
/// - `CUE_BRIDGE_OSC__PASSWORD=4012`
/// - `CUE_BRIDGE_WEBHOOK__ADDRESS_POLICY=strict`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_from_sources(config_path, environment())
}

/// 环境变量来源：前缀 `CUE_BRIDGE_`，层级分隔符 `__`
///
/// 不开启 try_parsing：密码和 cue 编号必须保留原始文本（如 "0123"、"1.50"），
/// 端口等数值字段在反序列化时再解析
fn environment() -> Environment {
    Environment::with_prefix("CUE_BRIDGE")
        .prefix_separator("_")
        .separator("__")
}

fn load_config_from_sources(
    config_path: Option<&Path>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 4888)?
        .set_default("osc.host", "127.0.0.1")?
        .set_default("osc.port", 53000)?
        .set_default("osc.password", "")?
        .set_default("osc.connect_address", "/connect")?
        .set_default("webhook.address_policy", "passthrough")?
        .set_default("webhook.default_cue_id", "1")?
        .set_default("webhook.default_action", "start")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    builder = builder.add_source(env);

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.osc.host.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "OSC host cannot be empty".to_string(),
        ));
    }

    if config.osc.port == 0 {
        return Err(ConfigError::ValidationError(
            "OSC port cannot be 0".to_string(),
        ));
    }

    if !config.osc.connect_address.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "OSC connect address must start with '/': {}",
            config.osc.connect_address
        )));
    }

    if config.webhook.default_cue_id.is_empty() || config.webhook.default_action.is_empty() {
        return Err(ConfigError::ValidationError(
            "Webhook defaults cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// 密码本身不会被打印
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("QLab OSC target: {}", config.osc.target());
    tracing::info!(
        "QLab authentication: {}",
        if config.osc.auth_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    tracing::info!("Address policy: {}", config.webhook.address_policy);
    tracing::info!("Webhook endpoint: {}", config.server.webhook_url());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
