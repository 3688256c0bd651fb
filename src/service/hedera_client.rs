//! Hedera SDK 适配
//! 交易构建、签名、提交与回执获取全部委托给 SDK

use std::str::FromStr;

use async_trait::async_trait;
use hedera::{AccountId, Client, Hbar, PrivateKey, TokenCreateTransaction};

use crate::{
    config::NetworkConfig,
    domain::{
        credentials::{OPERATOR_ACCOUNT_ID_VAR, OPERATOR_PRIVATE_KEY_VAR},
        OperatorCredentials, ReceiptStatus, TokenCreation, TokenReceipt, TokenSpec, TokenType,
    },
    error::ScriptError,
    service::ledger_client::{LedgerClient, LedgerConnector},
};

/// 预检与回执状态保留协议字面名（`INVALID_SIGNATURE`），其余 SDK 错误归为账本错误
fn ledger_err(e: hedera::Error) -> ScriptError {
    match e {
        hedera::Error::TransactionPreCheckStatus { status, .. }
        | hedera::Error::ReceiptStatus { status, .. } => ScriptError::TransactionFailed {
            status: status.as_str_name().to_owned(),
        },
        other => ScriptError::ledger(other.to_string()),
    }
}

fn to_sdk_token_type(token_type: TokenType) -> hedera::TokenType {
    match token_type {
        TokenType::FungibleCommon => hedera::TokenType::FungibleCommon,
    }
}

/// 为指定网络创建 SDK 客户端
#[derive(Debug, Default, Clone, Copy)]
pub struct HederaConnector;

impl LedgerConnector for HederaConnector {
    type Client = HederaLedgerClient;

    fn connect(
        &self,
        credentials: &OperatorCredentials,
        network: &NetworkConfig,
    ) -> Result<HederaLedgerClient, ScriptError> {
        let operator_id = AccountId::from_str(credentials.account_id()).map_err(|e| {
            ScriptError::invalid_config(format!("{} is not a valid account id: {}", OPERATOR_ACCOUNT_ID_VAR, e))
        })?;
        let raw_key = credentials.private_key();
        let operator_key = PrivateKey::from_str_ecdsa(raw_key.strip_prefix("0x").unwrap_or(raw_key))
            .map_err(|e| {
                ScriptError::invalid_config(format!(
                    "{} is not a valid ECDSA key: {}",
                    OPERATOR_PRIVATE_KEY_VAR, e
                ))
            })?;

        let client = Client::for_name(&network.name).map_err(|e| {
            ScriptError::invalid_config(format!("unknown network '{}': {}", network.name, e))
        })?;
        client.set_operator(operator_id.clone(), operator_key.clone());

        // 超出上限时由 SDK 拒绝
        client.set_default_max_transaction_fee(Hbar::new(network.max_transaction_fee_hbar));
        client.set_default_max_query_payment(Hbar::new(network.max_query_payment_hbar));

        tracing::info!(
            operator = %operator_id,
            network = %network.name,
            max_transaction_fee_hbar = network.max_transaction_fee_hbar,
            max_query_payment_hbar = network.max_query_payment_hbar,
            "Using account: {}",
            operator_id
        );

        Ok(HederaLedgerClient {
            client,
            operator_key,
        })
    }
}

pub struct HederaLedgerClient {
    client: Client,
    operator_key: PrivateKey,
}

#[async_trait]
impl LedgerClient for HederaLedgerClient {
    async fn create_token(&self, spec: &TokenSpec) -> Result<TokenCreation, ScriptError> {
        let treasury = AccountId::from_str(&spec.treasury_account_id).map_err(|e| {
            ScriptError::invalid_config(format!("invalid treasury account id: {}", e))
        })?;

        let mut tx = TokenCreateTransaction::new();
        tx.transaction_memo(spec.memo.as_str())
            .token_type(to_sdk_token_type(spec.token_type))
            .name(spec.name.as_str())
            .symbol(spec.symbol.as_str())
            .decimals(spec.decimals)
            .initial_supply(spec.initial_supply)
            .treasury_account_id(treasury)
            .freeze_default(spec.freeze_default);

        // 先冻结（锁定字段与手续费），签名覆盖冻结后的字节，最后提交
        tx.freeze_with(&self.client).map_err(ledger_err)?;

        let transaction_id = tx
            .get_transaction_id()
            .map(|id| id.to_string())
            .ok_or_else(|| ScriptError::ledger("frozen transaction carries no transaction id"))?;
        tracing::info!(
            transaction_id = %transaction_id,
            "The token create transaction ID: {}",
            transaction_id
        );

        tx.sign(self.operator_key.clone());
        let response = tx.execute(&self.client).await.map_err(ledger_err)?;

        // 状态交由调用方判定，这里不让 SDK 把非 SUCCESS 转成错误
        let mut receipt_query = response.get_receipt_query();
        receipt_query.validate_status(false);
        let receipt = receipt_query
            .execute(&self.client)
            .await
            .map_err(ledger_err)?;

        Ok(TokenCreation {
            transaction_id,
            receipt: TokenReceipt {
                status: ReceiptStatus::new(receipt.status.as_str_name()),
                token_id: receipt.token_id.map(|id| id.to_string()),
            },
        })
    }

    fn close(self) {
        // SDK 客户端在 drop 时停止后台网络任务
        drop(self.client);
    }
}
