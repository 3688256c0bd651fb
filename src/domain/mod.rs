//! Domain 模块
//!
//! 凭证、代币参数、回执、镜像节点记录与脚本阶段

pub mod credentials;
pub mod mirror_token;
pub mod receipt;
pub mod script_stage;
pub mod token;

// 重新导出常用类型
pub use credentials::OperatorCredentials;
pub use mirror_token::MirrorToken;
pub use receipt::{ReceiptStatus, TokenCreation, TokenReceipt};
pub use script_stage::{ScriptStage, StageTracker};
pub use token::{TokenSpec, TokenType};
