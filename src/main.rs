//! cue-bridge - Webhook to OSC bridge for QLab

use std::sync::Arc;

use cue_bridge::config::{load_config, print_config, AppConfig};
use cue_bridge::infrastructure::adapters::{UdpOscSender, UdpOscSenderConfig};
use cue_bridge::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting webhook to OSC bridge...");
    print_config(&config);

    // 创建 OSC 发送器（所有请求共享一个 UDP socket）
    let sender_config = UdpOscSenderConfig::new(&config.osc.host, config.osc.port);
    let sender = UdpOscSender::connect(sender_config).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to set up OSC sender for {}: {}",
            config.osc.target(),
            e
        )
    })?;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(&config, Arc::new(sender));
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置文件
fn init_logging(config: &AppConfig) {
    let log_filter = format!(
        "{},cue_bridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
