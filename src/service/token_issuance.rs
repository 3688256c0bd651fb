//! 代币发行步骤
//! 提交代币创建交易并检查回执状态；非 SUCCESS 一律终止，不重试

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    domain::{ScriptStage, StageTracker, TokenCreation, TokenSpec},
    error::ScriptError,
    infrastructure::ScriptLogger,
    service::ledger_client::LedgerClient,
    utils::url_builder::hashscan_transaction_url,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token_id: String,
    pub transaction_id: String,
    pub hashscan_transaction_url: String,
}

pub async fn issue_token<C>(
    client: &C,
    spec: &TokenSpec,
    config: &Config,
    logger: &ScriptLogger,
    stages: &mut StageTracker,
) -> Result<IssuedToken, ScriptError>
where
    C: LedgerClient + ?Sized,
{
    tracing::debug!(
        name = %spec.name,
        symbol = %spec.symbol,
        decimals = spec.decimals,
        initial_supply = spec.initial_supply,
        treasury = %spec.treasury_account_id,
        "Submitting token create transaction"
    );

    stages.advance(ScriptStage::TokenSubmitted);
    let creation = client.create_token(spec).await?;

    match inspect_receipt(creation, config) {
        Ok(issued) => {
            stages.advance(ScriptStage::Success);
            tracing::info!(
                token_id = %issued.token_id,
                "✅ Token created successfully. Token ID: {}",
                issued.token_id
            );
            logger.url(
                "Transaction was successful. View it at:",
                &issued.hashscan_transaction_url,
            );
            Ok(issued)
        }
        Err(e) => {
            stages.advance(ScriptStage::Failed);
            Err(e)
        }
    }
}

/// 回执判定：SUCCESS 且带 token id 才算成功
pub fn inspect_receipt(creation: TokenCreation, config: &Config) -> Result<IssuedToken, ScriptError> {
    let TokenCreation {
        transaction_id,
        receipt,
    } = creation;

    if !receipt.status.is_success() {
        return Err(ScriptError::TransactionFailed {
            status: receipt.status.to_string(),
        });
    }

    let token_id = receipt.token_id.ok_or(ScriptError::MissingTokenId)?;
    let hashscan_transaction_url = hashscan_transaction_url(
        &config.explorer.base_url,
        &config.network.name,
        &transaction_id,
    );

    Ok(IssuedToken {
        token_id,
        transaction_id,
        hashscan_transaction_url,
    })
}
