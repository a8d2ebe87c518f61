//! Cue Context - Value Objects

use serde::{Deserialize, Serialize};

use super::CueError;

/// Cue 编号
///
/// QLab 的 cue number 是任意字符串（如 "1"、"1.5"、"intro"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CueId(String);

impl CueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cue 动作（start、stop、pause、go ...）
///
/// 不做白名单限制，QLab 支持的任意动作都可以透传
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CueAction(String);

impl CueAction {
    pub fn new(action: impl Into<String>) -> Self {
        Self(action.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CueAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 地址校验策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPolicy {
    /// 原样拼接，不做任何校验
    #[default]
    Passthrough,
    /// 拒绝空段、`/`、空白、控制字符和 OSC 模式字符
    Strict,
}

/// OSC 地址模式中有特殊含义的字符
const OSC_RESERVED: &[char] = &['*', '?', '[', ']', '{', '}', ',', '#'];

impl AddressPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Strict => "strict",
        }
    }

    /// 校验一个地址段
    pub fn check_segment(&self, field: &'static str, segment: &str) -> Result<(), CueError> {
        if *self == Self::Passthrough {
            return Ok(());
        }

        if segment.is_empty() {
            return Err(CueError::EmptySegment { field });
        }

        if let Some(found) = segment
            .chars()
            .find(|c| *c == '/' || c.is_whitespace() || c.is_control() || OSC_RESERVED.contains(c))
        {
            return Err(CueError::ForbiddenCharacter { field, found });
        }

        Ok(())
    }
}

impl std::fmt::Display for AddressPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
