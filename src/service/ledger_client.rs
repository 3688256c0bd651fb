//! 账本客户端抽象
//! 一个会话绑定一个运营者；会话在所有退出路径上恰好关闭一次

use std::ops::Deref;

use async_trait::async_trait;

use crate::{
    config::NetworkConfig,
    domain::{OperatorCredentials, TokenCreation, TokenSpec},
    error::ScriptError,
};

/// 已绑定运营者与费用上限的网络会话
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// 冻结、签名、提交代币创建交易，并阻塞等待回执。
    /// 回执状态原样返回，不在此处判定成功与否。
    async fn create_token(&self, spec: &TokenSpec) -> Result<TokenCreation, ScriptError>;

    /// 释放网络会话
    fn close(self)
    where
        Self: Sized;
}

/// 建立会话；失败时不得留下任何需要释放的资源
pub trait LedgerConnector: Send + Sync {
    type Client: LedgerClient;

    fn connect(
        &self,
        credentials: &OperatorCredentials,
        network: &NetworkConfig,
    ) -> Result<Self::Client, ScriptError>;
}

/// 作用域内持有会话，离开作用域时关闭（包括 `?` 提前返回与 panic 展开）
pub struct SessionGuard<C: LedgerClient> {
    client: Option<C>,
}

impl<C: LedgerClient> SessionGuard<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// 显式关闭；之后 Drop 不再重复关闭
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(client) = self.client.take() {
            client.close();
            tracing::debug!("Ledger client closed");
        }
    }
}

impl<C: LedgerClient> Deref for SessionGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.client
            .as_ref()
            .unwrap_or_else(|| unreachable!("session used after close"))
    }
}

impl<C: LedgerClient> Drop for SessionGuard<C> {
    fn drop(&mut self) {
        self.release();
    }
}
