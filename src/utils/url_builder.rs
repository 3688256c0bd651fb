//! 人工核验用的 URL
//! HashScan 浏览器页面与镜像节点 REST 路径

use crate::utils::string_utils::trim_base_url;

pub fn hashscan_token_url(explorer_base: &str, network: &str, token_id: &str) -> String {
    format!("{}/{}/token/{}", trim_base_url(explorer_base), network, token_id)
}

pub fn hashscan_transaction_url(explorer_base: &str, network: &str, transaction_id: &str) -> String {
    format!(
        "{}/{}/transaction/{}",
        trim_base_url(explorer_base),
        network,
        transaction_id
    )
}

pub fn mirror_token_url(mirror_base: &str, token_id: &str) -> String {
    format!("{}/api/v1/tokens/{}", trim_base_url(mirror_base), token_id)
}
