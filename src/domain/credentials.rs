//! 运营者凭证
//! 从环境变量读取，运行期间不可变；私钥在日志中必须脱敏

use std::fmt;

use crate::{
    error::ScriptError,
    infrastructure::log_redact::{redact_hex_string, SensitiveRedact},
    utils::string_utils::is_blank,
};

pub const OPERATOR_ACCOUNT_ID_VAR: &str = "OPERATOR_ACCOUNT_ID";
pub const OPERATOR_PRIVATE_KEY_VAR: &str = "OPERATOR_ACCOUNT_PRIVATE_KEY";

/// 支付手续费并签名的运营者账户
#[derive(Clone, PartialEq, Eq)]
pub struct OperatorCredentials {
    account_id: String,
    private_key: String,
}

impl OperatorCredentials {
    /// 从进程环境读取
    pub fn from_env() -> Result<Self, ScriptError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源读取；任一变量缺失或为空即失败
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScriptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = lookup(OPERATOR_ACCOUNT_ID_VAR).filter(|v| !is_blank(v));
        let private_key = lookup(OPERATOR_PRIVATE_KEY_VAR).filter(|v| !is_blank(v));

        match (account_id, private_key) {
            (Some(account_id), Some(private_key)) => Ok(Self {
                account_id: account_id.trim().to_string(),
                private_key: private_key.trim().to_string(),
            }),
            _ => Err(ScriptError::MissingCredentials),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl SensitiveRedact for OperatorCredentials {
    fn redact(&self) -> String {
        format!(
            "OperatorCredentials {{ account_id: {}, private_key: {} }}",
            self.account_id,
            redact_hex_string(&self.private_key, 4)
        )
    }
}

impl fmt::Debug for OperatorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redact())
    }
}
