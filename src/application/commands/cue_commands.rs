//! Cue Commands

/// 触发 cue 命令
///
/// 字段已应用默认值，但尚未校验
#[derive(Debug, Clone)]
pub struct TriggerCue {
    pub cue_id: String,
    pub action: String,
}
