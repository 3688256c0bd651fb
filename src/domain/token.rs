//! 代币创建参数

use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;

pub const FUNGIBLE_DECIMALS: u32 = 2;
pub const FUNGIBLE_INITIAL_SUPPLY: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    FungibleCommon,
}

/// 一次代币创建交易的全部字段；构建后只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    pub memo: String,
    pub token_type: TokenType,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub initial_supply: u64,
    pub treasury_account_id: String,
    pub freeze_default: bool,
}

impl TokenSpec {
    /// 运营者同时作为金库账户，持有全部初始供应量
    pub fn fungible(config: &TokenConfig, treasury_account_id: &str) -> Self {
        Self {
            memo: config.memo.clone(),
            token_type: TokenType::FungibleCommon,
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            decimals: FUNGIBLE_DECIMALS,
            initial_supply: FUNGIBLE_INITIAL_SUPPLY,
            treasury_account_id: treasury_account_id.to_string(),
            freeze_default: false,
        }
    }
}
