//! hts-ft 主入口
//! Hello Future World - HTS Fungible Token

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use hts_fungible_token::{
    config::Config,
    error::ScriptError,
    infrastructure::{env_validator::EnvValidator, logging},
    service::{HederaConnector, HtsTokenScript, MirrorNodeClient},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !already_reported(&e) {
                tracing::error!("❌ {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// 脚本错误已由顶层处理器记录；其余启动阶段错误由 main 记录
fn already_reported(e: &anyhow::Error) -> bool {
    e.downcast_ref::<ScriptError>().is_some()
}

async fn run() -> anyhow::Result<()> {
    // ✅ 1. 加载 .env（ENV_FILE 指定路径，否则从当前目录向上查找）
    let env_loaded = match std::env::var("ENV_FILE") {
        Ok(path) => dotenvy::from_path(&path).map(|_| PathBuf::from(path)),
        Err(_) => dotenvy::dotenv(),
    };

    // ✅ 2. 加载配置（CONFIG_PATH 指向的 TOML 优先）
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = match Config::from_env_and_file(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    // ✅ 3. 初始化日志
    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match &env_loaded {
        Ok(path) => tracing::info!("Read .env file: {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }
    if let Some(path) = Config::missing_file(config_path.as_deref()) {
        tracing::warn!(path = %path, "Config file not found, using environment");
    }

    // ✅ 4. 预检（不触网）
    config.validate().context("Invalid configuration")?;
    EnvValidator::validate_and_log()?;

    // ✅ 5. 执行脚本
    let mirror = MirrorNodeClient::new(&config.mirror).context("build mirror node client")?;
    let script = HtsTokenScript::new(config, HederaConnector, mirror);
    let report = script.run().await?;

    tracing::debug!(
        report = %serde_json::to_string(&report).unwrap_or_default(),
        "Script report"
    );

    Ok(())
}
