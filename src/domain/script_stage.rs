//! 脚本阶段状态机
//! Init → ClientReady → TokenSubmitted → {Success → Verifying → Done, Failed → Aborted}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptStage {
    /// 尚未创建客户端
    Init,

    /// 客户端已绑定运营者
    ClientReady,

    /// 交易已提交，等待回执
    TokenSubmitted,

    /// 回执状态为 SUCCESS
    Success,

    /// 回执状态非 SUCCESS
    Failed,

    /// 等待传播并查询镜像节点
    Verifying,

    Done,

    Aborted,
}

impl ScriptStage {
    /// 是否为最终状态（不可再转换）
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }

    /// 验证状态转换合法性；任何非终态都可以因错误进入 Aborted
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use ScriptStage::*;

        match (self, target) {
            _ if self.is_final() => false,
            (Init, ClientReady) => true,
            (ClientReady, TokenSubmitted) => true,
            (TokenSubmitted, Success) | (TokenSubmitted, Failed) => true,
            (Success, Verifying) => true,
            (Verifying, Done) => true,
            (_, Aborted) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ClientReady => "client_ready",
            Self::TokenSubmitted => "token_submitted",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Verifying => "verifying",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }
}

impl fmt::Display for ScriptStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 记录当前阶段并拒绝非法转换
#[derive(Debug)]
pub struct StageTracker {
    current: ScriptStage,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self {
            current: ScriptStage::Init,
        }
    }
}

impl StageTracker {
    pub fn current(&self) -> ScriptStage {
        self.current
    }

    pub fn advance(&mut self, target: ScriptStage) {
        debug_assert!(
            self.current.can_transition_to(&target),
            "illegal stage transition {} -> {}",
            self.current,
            target
        );
        tracing::debug!(from = %self.current, to = %target, "script stage transition");
        self.current = target;
    }

    /// 失败路径：非终态进入 Aborted，已是终态则保持不变
    pub fn abort(&mut self) {
        if !self.current.is_final() {
            self.advance(ScriptStage::Aborted);
        }
    }
}
