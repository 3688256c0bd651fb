//! HTS Fungible Token - 在 Hedera 测试网创建同质化代币并通过镜像节点核验
//!
//! 账本 SDK、日志输出与 `.env` 解析均为外部依赖，本 crate 只负责流程编排

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::{ScriptError, ScriptErrorCode};

pub mod prelude {
    pub use crate::{
        config::Config,
        domain::{MirrorToken, OperatorCredentials, ScriptStage, TokenSpec},
        error::{ScriptError, ScriptErrorCode},
        service::{HtsTokenScript, LedgerClient, LedgerConnector, MirrorApi, ScriptReport},
    };
}
