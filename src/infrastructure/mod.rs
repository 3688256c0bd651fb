pub mod env_validator;
pub mod log_redact;
pub mod logging;
pub mod script_logger;

pub use script_logger::ScriptLogger;
