//! 环境变量验证器
//! 只校验已设置变量的格式；凭证缺失由 OperatorCredentials 负责报告

use std::env;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::credentials::{OPERATOR_ACCOUNT_ID_VAR, OPERATOR_PRIVATE_KEY_VAR};

/// shard.realm.num，可带校验和后缀（0.0.1234-abcde）
static ACCOUNT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+(-[a-z]{5})?$").expect("valid account id regex"));

#[derive(Debug)]
pub struct EnvValidator;

impl EnvValidator {
    /// 验证进程环境
    pub fn validate_all() -> Result<(), Vec<String>> {
        Self::validate_with(|name| env::var(name).ok())
    }

    pub fn validate_with<F>(lookup: F) -> Result<(), Vec<String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(account_id) = lookup(OPERATOR_ACCOUNT_ID_VAR).filter(|v| !v.trim().is_empty()) {
            if !ACCOUNT_ID_RE.is_match(account_id.trim()) {
                errors.push(format!(
                    "{} must look like shard.realm.num (e.g. 0.0.1234)",
                    OPERATOR_ACCOUNT_ID_VAR
                ));
            }
        }

        if let Some(key) = lookup(OPERATOR_PRIVATE_KEY_VAR).filter(|v| !v.trim().is_empty()) {
            if let Err(msg) = check_private_key_shape(key.trim()) {
                errors.push(format!("{} {}", OPERATOR_PRIVATE_KEY_VAR, msg));
            }
        }

        for var in [
            "MAX_TRANSACTION_FEE_HBAR",
            "MAX_QUERY_PAYMENT_HBAR",
            "MIRROR_PROPAGATION_DELAY_MS",
            "MIRROR_TIMEOUT_SECS",
        ] {
            if let Some(v) = lookup(var) {
                if v.trim().parse::<u64>().is_err() {
                    errors.push(format!("{} must be a non-negative integer", var));
                }
            }
        }

        if let Some(url) = lookup("MIRROR_NODE_URL") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push("MIRROR_NODE_URL must start with http:// or https://".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 验证并打印错误
    pub fn validate_and_log() -> Result<(), anyhow::Error> {
        match Self::validate_all() {
            Ok(()) => {
                tracing::debug!("Environment variables validation passed");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    tracing::error!("{}", error);
                }
                Err(anyhow::anyhow!(
                    "Environment validation failed: {} error(s)",
                    errors.len()
                ))
            }
        }
    }
}

/// ECDSA 私钥：32 字节原始 hex 或 DER 编码 hex，可带 0x 前缀
fn check_private_key_shape(key: &str) -> Result<(), &'static str> {
    let raw = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(raw).map_err(|_| "must be hex encoded")?;
    if bytes.len() < 32 {
        return Err("is too short for an ECDSA private key");
    }
    Ok(())
}
