//! 镜像节点验证步骤
//! 固定等待一次传播延迟后查询一次；只做观察，不与创建参数比对

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    domain::MirrorToken,
    error::ScriptError,
    infrastructure::ScriptLogger,
    service::mirror_client::MirrorApi,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub hashscan_token_url: String,
    pub mirror_url: String,
    pub token: MirrorToken,
}

pub async fn verify_token<M>(
    mirror: &M,
    token_id: &str,
    hashscan_token_url: String,
    propagation_delay: Duration,
    logger: &ScriptLogger,
) -> Result<VerificationReport, ScriptError>
where
    M: MirrorApi + ?Sized,
{
    logger.section("View the token on HashScan");
    logger.url("Paste URL in browser:", &hashscan_token_url);

    // 等待记录文件（区块）传播到镜像节点
    tracing::debug!(
        delay_ms = propagation_delay.as_millis() as u64,
        "Waiting for mirror node propagation"
    );
    tokio::time::sleep(propagation_delay).await;

    logger.section("Get token data from the Hedera Mirror Node");
    let mirror_url = mirror.token_url(token_id);
    logger.url("The token Hedera Mirror Node API URL:", &mirror_url);

    let token = mirror.fetch_token(token_id).await?;
    tracing::info!("The name of this token: {}", token.name_display());
    tracing::info!("The total supply of this token: {}", token.total_supply_display());

    Ok(VerificationReport {
        hashscan_token_url,
        mirror_url,
        token,
    })
}
