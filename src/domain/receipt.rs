//! 交易回执
//! 网络返回的最终结果，对本程序只读

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS: &str = "SUCCESS";

/// 回执状态，保存网络使用的字面名称（如 `SUCCESS`、`INVALID_SIGNATURE`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptStatus(String);

impl ReceiptStatus {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn success() -> Self {
        Self::new(SUCCESS_STATUS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_success(&self) -> bool {
        self.0 == SUCCESS_STATUS
    }
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `token_id` 仅在状态为 SUCCESS 时存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReceipt {
    pub status: ReceiptStatus,
    pub token_id: Option<String>,
}

/// 一次已提交的代币创建交易
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreation {
    pub transaction_id: String,
    pub receipt: TokenReceipt,
}
