//! Hello Future World - HTS 同质化代币脚本
//!
//! 单次顺序执行：
//! 1. 读取运营者凭证（缺失即失败，不触网）
//! 2. 建立绑定运营者的账本会话
//! 3. 创建代币并检查回执
//! 4. 固定延迟后通过镜像节点核验
//!
//! 账本会话由 [`SessionGuard`] 持有，第 2~4 步的任何退出路径都会关闭它。

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::{
    config::{Config, SCRIPT_CATEGORY, SCRIPT_ID, SCRIPT_VERSION},
    domain::{MirrorToken, OperatorCredentials, ScriptStage, StageTracker, TokenSpec},
    error::ScriptError,
    infrastructure::ScriptLogger,
    service::{
        ledger_client::{LedgerConnector, SessionGuard},
        mirror_client::MirrorApi,
        token_issuance::issue_token,
        verification::verify_token,
    },
    utils::url_builder::hashscan_token_url,
};

/// 一次成功运行的全部可观察结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptReport {
    pub token_id: String,
    pub transaction_id: String,
    pub hashscan_transaction_url: String,
    pub hashscan_token_url: String,
    pub mirror_url: String,
    pub mirror_token: MirrorToken,
    pub stage: ScriptStage,
}

pub struct HtsTokenScript<L, M> {
    config: Config,
    connector: L,
    mirror: M,
    logger: ScriptLogger,
}

impl<L, M> HtsTokenScript<L, M>
where
    L: LedgerConnector,
    M: MirrorApi,
{
    pub fn new(config: Config, connector: L, mirror: M) -> Self {
        let logger = ScriptLogger::new(SCRIPT_ID, SCRIPT_CATEGORY, SCRIPT_VERSION)
            .with_ansi(config.logging.format != "json");
        Self {
            config,
            connector,
            mirror,
            logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn logger(&self) -> &ScriptLogger {
        &self.logger
    }

    /// 从进程环境读取凭证并运行
    pub async fn run(&self) -> Result<ScriptReport, ScriptError> {
        self.run_with_lookup(|name| std::env::var(name).ok()).await
    }

    /// 顶层错误处理：记录错误并把阶段推进到 Aborted
    pub async fn run_with_lookup<F>(&self, lookup: F) -> Result<ScriptReport, ScriptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let span = self.logger.span();
        async {
            let mut stages = StageTracker::default();
            let result = self.execute(lookup, &mut stages).await;
            if let Err(e) = &result {
                stages.abort();
                self.logger.error(e);
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn execute<F>(
        &self,
        lookup: F,
        stages: &mut StageTracker,
    ) -> Result<ScriptReport, ScriptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.logger
            .start("Hello Future World - HTS Fungible Token - start");

        let credentials = OperatorCredentials::from_lookup(lookup)?;
        tracing::debug!(credentials = ?credentials, "Operator credentials loaded");

        let session = SessionGuard::new(
            self.connector
                .connect(&credentials, &self.config.network)?,
        );
        stages.advance(ScriptStage::ClientReady);

        self.logger.section("Creating new HTS token");
        let spec = TokenSpec::fungible(&self.config.token, credentials.account_id());
        let issued = issue_token(&*session, &spec, &self.config, &self.logger, stages).await?;

        stages.advance(ScriptStage::Verifying);
        let token_url = hashscan_token_url(
            &self.config.explorer.base_url,
            &self.config.network.name,
            &issued.token_id,
        );
        let verification = verify_token(
            &self.mirror,
            &issued.token_id,
            token_url,
            self.config.mirror.propagation_delay(),
            &self.logger,
        )
        .await?;

        session.close();
        stages.advance(ScriptStage::Done);
        self.logger
            .complete("Hello Future World - HTS Fungible Token - complete");

        Ok(ScriptReport {
            token_id: issued.token_id,
            transaction_id: issued.transaction_id,
            hashscan_transaction_url: issued.hashscan_transaction_url,
            hashscan_token_url: verification.hashscan_token_url,
            mirror_url: verification.mirror_url,
            mirror_token: verification.token,
            stage: stages.current(),
        })
    }
}
