//! Cue Context - CueCommand

use super::{AddressPolicy, CueAction, CueError, CueId};

/// 一次 cue 触发
///
/// 不变量:
/// - 按 `policy` 校验通过后才能构造
/// - 地址固定为 `/cue/{cue_id}/{action}`，不做转义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueCommand {
    cue_id: CueId,
    action: CueAction,
}

impl CueCommand {
    pub fn new(cue_id: CueId, action: CueAction, policy: AddressPolicy) -> Result<Self, CueError> {
        policy.check_segment("cue_id", cue_id.as_str())?;
        policy.check_segment("action", action.as_str())?;
        Ok(Self { cue_id, action })
    }

    pub fn cue_id(&self) -> &CueId {
        &self.cue_id
    }

    pub fn action(&self) -> &CueAction {
        &self.action
    }

    /// QLab OSC 地址
    pub fn address(&self) -> String {
        format!("/cue/{}/{}", self.cue_id, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(cue_id: &str, action: &str, policy: AddressPolicy) -> Result<CueCommand, CueError> {
        CueCommand::new(CueId::new(cue_id), CueAction::new(action), policy)
    }

    #[test]
    fn test_address_format() {
        let cmd = command("7", "stop", AddressPolicy::Passthrough).unwrap();
        assert_eq!(cmd.address(), "/cue/7/stop");
        assert_eq!(cmd.cue_id().as_str(), "7");
        assert_eq!(cmd.action().as_str(), "stop");
    }

    #[test]
    fn test_passthrough_interpolates_verbatim() {
        let cmd = command("1/../2", "go now", AddressPolicy::Passthrough).unwrap();
        assert_eq!(cmd.address(), "/cue/1/../2/go now");
    }

    #[test]
    fn test_strict_rejects_injected_segment() {
        let err = command("1", "start/../stop", AddressPolicy::Strict).unwrap_err();
        assert!(matches!(err, CueError::ForbiddenCharacter { field: "action", .. }));
    }
}
