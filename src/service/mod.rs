pub mod hedera_client;
pub mod hts_script;
pub mod ledger_client;
pub mod mirror_client;
pub mod token_issuance;
pub mod verification;

pub use hedera_client::{HederaConnector, HederaLedgerClient};
pub use hts_script::{HtsTokenScript, ScriptReport};
pub use ledger_client::{LedgerClient, LedgerConnector, SessionGuard};
pub use mirror_client::{MirrorApi, MirrorNodeClient};
