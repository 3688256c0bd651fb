//! 统一错误定义
//! 脚本的所有失败都是终止性的：配置错误、账本错误、交易失败、镜像节点验证错误

use thiserror::Error;

use crate::domain::credentials::{OPERATOR_ACCOUNT_ID_VAR, OPERATOR_PRIVATE_KEY_VAR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptErrorCode {
    MissingCredentials,
    InvalidConfig,
    Ledger,
    TransactionFailed,
    MissingTokenId,
    Verification,
}

impl ScriptErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::InvalidConfig => "invalid_config",
            Self::Ledger => "ledger_error",
            Self::TransactionFailed => "transaction_failed",
            Self::MissingTokenId => "missing_token_id",
            Self::Verification => "verification_failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum ScriptError {
    /// 预检失败：此时尚未创建任何网络资源
    #[error("Must set {} and {} environment variables", OPERATOR_ACCOUNT_ID_VAR, OPERATOR_PRIVATE_KEY_VAR)]
    MissingCredentials,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ledger client error: {0}")]
    Ledger(String),

    #[error("❌ Token creation transaction failed with status: {status}")]
    TransactionFailed { status: String },

    #[error("receipt reported SUCCESS but carried no token id")]
    MissingTokenId,

    #[error("mirror node verification failed: {0}")]
    Verification(String),
}

impl ScriptError {
    pub fn code(&self) -> ScriptErrorCode {
        match self {
            Self::MissingCredentials => ScriptErrorCode::MissingCredentials,
            Self::InvalidConfig(_) => ScriptErrorCode::InvalidConfig,
            Self::Ledger(_) => ScriptErrorCode::Ledger,
            Self::TransactionFailed { .. } => ScriptErrorCode::TransactionFailed,
            Self::MissingTokenId => ScriptErrorCode::MissingTokenId,
            Self::Verification(_) => ScriptErrorCode::Verification,
        }
    }

    /// 是否在获取任何网络资源之前失败
    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::MissingCredentials | Self::InvalidConfig(_))
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn ledger(msg: impl Into<String>) -> Self {
        Self::Ledger(msg.into())
    }

    pub fn verification(msg: impl Into<String>) -> Self {
        Self::Verification(msg.into())
    }
}

impl From<reqwest::Error> for ScriptError {
    fn from(e: reqwest::Error) -> Self {
        Self::Verification(e.to_string())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        Self::Verification(format!("malformed mirror node response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_names_both_variables() {
        let msg = ScriptError::MissingCredentials.to_string();
        assert!(msg.contains("OPERATOR_ACCOUNT_ID"));
        assert!(msg.contains("OPERATOR_ACCOUNT_PRIVATE_KEY"));
    }

    #[test]
    fn test_transaction_failed_embeds_status() {
        let err = ScriptError::TransactionFailed {
            status: "INVALID_SIGNATURE".to_string(),
        };
        assert!(err.to_string().contains("INVALID_SIGNATURE"));
        assert_eq!(err.code().as_str(), "transaction_failed");
        assert!(!err.is_preflight());
    }

    #[test]
    fn test_preflight_classification() {
        assert!(ScriptError::MissingCredentials.is_preflight());
        assert!(ScriptError::invalid_config("bad key").is_preflight());
        assert!(!ScriptError::verification("timeout").is_preflight());
    }
}
