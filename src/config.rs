//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SCRIPT_ID: &str = "htsFt";
pub const SCRIPT_CATEGORY: &str = "task";
pub const SCRIPT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 镜像节点需要等待记录文件传播的最短时间
pub const MIN_PROPAGATION_DELAY_MS: u64 = 6_000;

pub const SUPPORTED_NETWORKS: [&str; 4] = ["mainnet", "testnet", "previewnet", "localhost"];

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub mirror: MirrorConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 账本网络与费用上限（单位：ℏ）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub name: String,
    pub max_transaction_fee_hbar: i64,
    pub max_query_payment_hbar: i64,
}

/// 代币名称、符号与交易备注
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub memo: String,
}

/// 镜像节点 REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    pub base_url: String,
    pub propagation_delay_ms: u64,
    pub request_timeout_secs: u64,
}

/// HashScan 浏览器
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub base_url: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

fn network_from_env() -> String {
    std::env::var("HEDERA_NETWORK").unwrap_or_else(|_| "testnet".into())
}

/// 各网络的公共镜像节点
pub fn default_mirror_url(network: &str) -> String {
    match network {
        "mainnet" => "https://mainnet-public.mirrornode.hedera.com".into(),
        "previewnet" => "https://previewnet.mirrornode.hedera.com".into(),
        "localhost" => "http://localhost:5551".into(),
        _ => "https://testnet.mirrornode.hedera.com".into(),
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: network_from_env(),
            max_transaction_fee_hbar: std::env::var("MAX_TRANSACTION_FEE_HBAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            max_query_payment_hbar: std::env::var("MAX_QUERY_PAYMENT_HBAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl TokenConfig {
    pub fn for_script(script_id: &str, version: &str) -> Self {
        Self {
            name: format!("{} coin", script_id),
            symbol: script_id.to_uppercase(),
            memo: format!("Hello Future World token - {}", version),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        let derived = Self::for_script(SCRIPT_ID, SCRIPT_VERSION);
        Self {
            name: std::env::var("TOKEN_NAME").unwrap_or(derived.name),
            symbol: std::env::var("TOKEN_SYMBOL").unwrap_or(derived.symbol),
            memo: std::env::var("TOKEN_MEMO").unwrap_or(derived.memo),
        }
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MIRROR_NODE_URL")
                .unwrap_or_else(|_| default_mirror_url(&network_from_env())),
            propagation_delay_ms: std::env::var("MIRROR_PROPAGATION_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(MIN_PROPAGATION_DELAY_MS),
            request_timeout_secs: std::env::var("MIRROR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl MirrorConfig {
    pub fn propagation_delay(&self) -> Duration {
        Duration::from_millis(self.propagation_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("HASHSCAN_URL").unwrap_or_else(|_| "https://hashscan.io".into()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self::default())
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 指定了但不存在的配置文件；日志初始化之后由调用方提示
    pub fn missing_file<P: AsRef<Path>>(path: Option<P>) -> Option<P> {
        path.filter(|p| !p.as_ref().exists())
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    ///
    /// 文件不存在时回退到环境变量，见 [`Config::missing_file`]
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path.filter(|p| p.as_ref().exists()) {
            // 文件中未出现的段落按环境变量默认值补齐
            config = Self::from_file(path)?;
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_NETWORKS.contains(&self.network.name.as_str()) {
            anyhow::bail!(
                "HEDERA_NETWORK must be one of: {:?}, got '{}'",
                SUPPORTED_NETWORKS,
                self.network.name
            );
        }

        if self.network.max_transaction_fee_hbar <= 0 {
            anyhow::bail!("MAX_TRANSACTION_FEE_HBAR must be positive");
        }
        if self.network.max_query_payment_hbar <= 0 {
            anyhow::bail!("MAX_QUERY_PAYMENT_HBAR must be positive");
        }

        if self.token.name.trim().is_empty() || self.token.symbol.trim().is_empty() {
            anyhow::bail!("token name and symbol must not be empty");
        }

        if !self.mirror.base_url.starts_with("http://")
            && !self.mirror.base_url.starts_with("https://")
        {
            anyhow::bail!("MIRROR_NODE_URL must start with http:// or https://");
        }

        if self.mirror.propagation_delay_ms < MIN_PROPAGATION_DELAY_MS {
            anyhow::bail!(
                "MIRROR_PROPAGATION_DELAY_MS must be at least {}",
                MIN_PROPAGATION_DELAY_MS
            );
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
