//! 镜像节点 REST 客户端
//! 单次 GET，不重试；HTTP 与 JSON 错误原样向上传播

use async_trait::async_trait;

use crate::{
    config::MirrorConfig,
    domain::MirrorToken,
    error::ScriptError,
    utils::url_builder::mirror_token_url,
};

#[async_trait]
pub trait MirrorApi: Send + Sync {
    fn token_url(&self, token_id: &str) -> String;

    async fn fetch_token(&self, token_id: &str) -> Result<MirrorToken, ScriptError>;
}

pub struct MirrorNodeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MirrorNodeClient {
    pub fn new(config: &MirrorConfig) -> Result<Self, ScriptError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ScriptError::invalid_config(format!("build mirror http client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MirrorApi for MirrorNodeClient {
    fn token_url(&self, token_id: &str) -> String {
        mirror_token_url(&self.base_url, token_id)
    }

    async fn fetch_token(&self, token_id: &str) -> Result<MirrorToken, ScriptError> {
        let url = self.token_url(token_id);
        let resp = self.http_client.get(&url).send().await?;
        let status = resp.status();

        // 非 2xx 仍按 JSON 解析：镜像节点的 404 带 `_status` 正文，字段缺失按 undefined 输出
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                "Mirror node returned a non-success status"
            );
        }

        let body = resp.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;
        Ok(MirrorToken::from_json(&json))
    }
}
