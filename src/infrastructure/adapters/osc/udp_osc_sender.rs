//! UDP OSC Sender - 通过 UDP 向 QLab 发送 OSC 消息
//!
//! 实现 OscSenderPort trait
//!
//! - 启动时解析目标地址并绑定一个本地临时端口
//! - 所有请求共享同一个 socket（`send_to` 只需 `&self`，无需加锁）
//! - 只发送，不等待应答

use async_trait::async_trait;
use rosc::{encoder, OscPacket, OscType};
use std::io;
use std::net::SocketAddr;
use tokio::net::{lookup_host, UdpSocket};

use crate::application::ports::{OscArg, OscMessage, OscSendError, OscSenderPort};

/// UDP OSC Sender 配置
#[derive(Debug, Clone)]
pub struct UdpOscSenderConfig {
    /// 目标主机（IP 或主机名）
    pub host: String,
    /// 目标端口
    pub port: u16,
}

impl Default for UdpOscSenderConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 53000,
        }
    }
}

impl UdpOscSenderConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// UDP OSC Sender
pub struct UdpOscSender {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpOscSender {
    /// 解析目标地址并绑定本地 socket
    pub async fn connect(config: UdpOscSenderConfig) -> Result<Self, io::Error> {
        let target = lookup_host((config.host.as_str(), config.port))
            .await?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No address found for {}:{}", config.host, config.port),
                )
            })?;

        let local: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local).await?;

        tracing::info!(
            destination = %target,
            local = %socket.local_addr()?,
            "UDP OSC sender ready"
        );

        Ok(Self { socket, target })
    }

    /// 解析后的目标地址
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

/// 编码为 OSC 1.0 二进制格式
fn encode(message: &OscMessage) -> Result<Vec<u8>, OscSendError> {
    let packet = OscPacket::Message(rosc::OscMessage {
        addr: message.address.clone(),
        args: message.args.iter().map(to_osc_type).collect(),
    });

    encoder::encode(&packet).map_err(|e| OscSendError::Encode {
        address: message.address.clone(),
        reason: format!("{:?}", e),
    })
}

fn to_osc_type(arg: &OscArg) -> OscType {
    match arg {
        OscArg::Str(s) => OscType::String(s.clone()),
        OscArg::Int(i) => OscType::Int(*i),
        OscArg::Float(f) => OscType::Float(*f),
        OscArg::Bool(b) => OscType::Bool(*b),
    }
}

#[async_trait]
impl OscSenderPort for UdpOscSender {
    async fn send(&self, message: OscMessage) -> Result<(), OscSendError> {
        let buf = encode(&message).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to encode OSC message");
        })?;

        match self.socket.send_to(&buf, self.target).await {
            Ok(_) => {
                tracing::info!(
                    address = %message.address,
                    args = message.args.len(),
                    "Sent OSC message"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    address = %message.address,
                    destination = %self.target,
                    error = %e,
                    "Failed to send OSC message"
                );
                Err(OscSendError::Transport {
                    address: message.address,
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosc::decoder;
    use std::time::Duration;

    async fn receiver() -> (UdpSocket, UdpOscSender) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let sender = UdpOscSender::connect(UdpOscSenderConfig::new("127.0.0.1", port))
            .await
            .unwrap();
        (socket, sender)
    }

    async fn recv_message(socket: &UdpSocket) -> rosc::OscMessage {
        let mut buf = [0u8; decoder::MTU];
        let (len, _) = tokio::time::timeout(Duration::from_secs(2), socket.recv_from(&mut buf))
            .await
            .expect("timed out waiting for datagram")
            .unwrap();
        match decoder::decode_udp(&buf[..len]).unwrap().1 {
            OscPacket::Message(msg) => msg,
            OscPacket::Bundle(_) => panic!("expected a message, got a bundle"),
        }
    }

    #[test]
    fn test_config_default() {
        let config = UdpOscSenderConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 53000);
    }

    #[test]
    fn test_encode_is_four_byte_aligned() {
        let buf = encode(&OscMessage::new("/cue/1/start")).unwrap();
        assert_eq!(buf.len() % 4, 0);
        assert!(buf.starts_with(b"/cue/1/start\0"));
    }

    #[tokio::test]
    async fn test_sends_command_datagram() {
        let (socket, sender) = receiver().await;

        sender.send(OscMessage::new("/cue/7/stop")).await.unwrap();

        let msg = recv_message(&socket).await;
        assert_eq!(msg.addr, "/cue/7/stop");
        assert!(msg.args.is_empty());
    }

    #[tokio::test]
    async fn test_sends_string_argument() {
        let (socket, sender) = receiver().await;

        sender
            .send(OscMessage::new("/connect").with_arg("4012"))
            .await
            .unwrap();

        let msg = recv_message(&socket).await;
        assert_eq!(msg.addr, "/connect");
        assert_eq!(msg.args, vec![OscType::String("4012".to_string())]);
    }

    #[tokio::test]
    async fn test_sends_typed_arguments() {
        let (socket, sender) = receiver().await;

        sender
            .send(
                OscMessage::new("/cue/1/level")
                    .with_arg(3i32)
                    .with_arg(0.5f32)
                    .with_arg(true),
            )
            .await
            .unwrap();

        let msg = recv_message(&socket).await;
        assert_eq!(
            msg.args,
            vec![OscType::Int(3), OscType::Float(0.5), OscType::Bool(true)]
        );
    }

    #[tokio::test]
    async fn test_connect_resolves_target() {
        let sender = UdpOscSender::connect(UdpOscSenderConfig::new("127.0.0.1", 53000))
            .await
            .unwrap();
        assert_eq!(sender.target(), "127.0.0.1:53000".parse().unwrap());
    }
}
