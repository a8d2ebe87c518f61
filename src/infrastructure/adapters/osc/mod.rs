//! OSC Adapter - OSC 发送器实现

mod recording_osc_sender;
mod udp_osc_sender;

pub use recording_osc_sender::RecordingOscSender;
pub use udp_osc_sender::{UdpOscSender, UdpOscSenderConfig};
