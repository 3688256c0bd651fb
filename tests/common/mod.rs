//! 测试辅助模块
//! 提供假账本、假镜像节点、固定配置和日志捕获

#![allow(dead_code)]

use std::{
    collections::HashMap,
    io,
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use hts_fungible_token::{
    config::{Config, ExplorerConfig, LoggingConfig, MirrorConfig, NetworkConfig, TokenConfig},
    domain::{MirrorToken, OperatorCredentials, ReceiptStatus, TokenCreation, TokenReceipt, TokenSpec},
    error::ScriptError,
    service::{LedgerClient, LedgerConnector, MirrorApi},
    utils::url_builder::mirror_token_url,
};
use tokio::time::Instant;
use tracing_subscriber::fmt::MakeWriter;

pub const TEST_ACCOUNT_ID: &str = "0.0.4321";
pub const TEST_PRIVATE_KEY: &str =
    "0x1111222233334444555566667777888899990000aaaabbbbccccddddeeeeffff";
pub const MIRROR_BASE: &str = "https://testnet.mirrornode.hedera.com";

/// 不依赖进程环境的固定配置
pub fn test_config() -> Config {
    Config {
        network: NetworkConfig {
            name: "testnet".into(),
            max_transaction_fee_hbar: 100,
            max_query_payment_hbar: 50,
        },
        token: TokenConfig::for_script("htsFt", "0.1.0"),
        mirror: MirrorConfig {
            base_url: MIRROR_BASE.into(),
            propagation_delay_ms: 6_000,
            request_timeout_secs: 5,
        },
        explorer: ExplorerConfig {
            base_url: "https://hashscan.io".into(),
        },
        logging: LoggingConfig {
            level: "debug".into(),
            format: "text".into(),
        },
    }
}

pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

pub fn full_credentials() -> impl Fn(&str) -> Option<String> {
    lookup_from(&[
        ("OPERATOR_ACCOUNT_ID", TEST_ACCOUNT_ID),
        ("OPERATOR_ACCOUNT_PRIVATE_KEY", TEST_PRIVATE_KEY),
    ])
}

// ============ 假账本 ============

/// 记录账本侧所有可观察的副作用
#[derive(Clone)]
pub struct LedgerProbe {
    pub connects: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
    pub submissions: Arc<AtomicUsize>,
    pub confirmed_at: Arc<Mutex<Option<Instant>>>,
    pub last_spec: Arc<Mutex<Option<TokenSpec>>>,
    next_token_num: Arc<AtomicU64>,
}

impl Default for LedgerProbe {
    fn default() -> Self {
        Self {
            connects: Arc::default(),
            closes: Arc::default(),
            submissions: Arc::default(),
            confirmed_at: Arc::default(),
            last_spec: Arc::default(),
            next_token_num: Arc::new(AtomicU64::new(1234)),
        }
    }
}

impl LedgerProbe {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }
}

pub struct FakeConnector {
    pub probe: LedgerProbe,
    pub status: &'static str,
    pub reject_connect: bool,
}

impl FakeConnector {
    pub fn succeeding(probe: LedgerProbe) -> Self {
        Self {
            probe,
            status: "SUCCESS",
            reject_connect: false,
        }
    }

    pub fn with_status(probe: LedgerProbe, status: &'static str) -> Self {
        Self {
            probe,
            status,
            reject_connect: false,
        }
    }
}

impl LedgerConnector for FakeConnector {
    type Client = FakeLedgerClient;

    fn connect(
        &self,
        credentials: &OperatorCredentials,
        _network: &NetworkConfig,
    ) -> Result<FakeLedgerClient, ScriptError> {
        if self.reject_connect {
            return Err(ScriptError::invalid_config(format!(
                "{} is not a valid account id",
                credentials.account_id()
            )));
        }
        self.probe.connects.fetch_add(1, Ordering::SeqCst);
        Ok(FakeLedgerClient {
            probe: self.probe.clone(),
            status: self.status,
        })
    }
}

pub struct FakeLedgerClient {
    probe: LedgerProbe,
    status: &'static str,
}

#[async_trait]
impl LedgerClient for FakeLedgerClient {
    async fn create_token(&self, spec: &TokenSpec) -> Result<TokenCreation, ScriptError> {
        self.probe.submissions.fetch_add(1, Ordering::SeqCst);
        *self.probe.last_spec.lock().unwrap() = Some(spec.clone());

        let status = ReceiptStatus::new(self.status);
        let token_id = if status.is_success() {
            let num = self.probe.next_token_num.fetch_add(1, Ordering::SeqCst);
            *self.probe.confirmed_at.lock().unwrap() = Some(Instant::now());
            Some(format!("0.0.{}", num))
        } else {
            None
        };

        Ok(TokenCreation {
            transaction_id: format!("{}@1700000000.000000001", spec.treasury_account_id),
            receipt: TokenReceipt { status, token_id },
        })
    }

    fn close(self) {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
    }
}

// ============ 假镜像节点 ============

#[derive(Clone)]
pub struct FakeMirror {
    pub calls: Arc<AtomicUsize>,
    pub fetched_at: Arc<Mutex<Option<Instant>>>,
    pub body: serde_json::Value,
    pub fail: bool,
}

impl FakeMirror {
    pub fn returning(body: serde_json::Value) -> Self {
        Self {
            calls: Arc::default(),
            fetched_at: Arc::default(),
            body,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(serde_json::Value::Null)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MirrorApi for FakeMirror {
    fn token_url(&self, token_id: &str) -> String {
        mirror_token_url(MIRROR_BASE, token_id)
    }

    async fn fetch_token(&self, _token_id: &str) -> Result<MirrorToken, ScriptError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.fetched_at.lock().unwrap() = Some(Instant::now());
        if self.fail {
            return Err(ScriptError::verification("connection refused"));
        }
        Ok(MirrorToken::from_json(&self.body))
    }
}

// ============ 日志捕获 ============

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}

/// 当前线程内捕获日志；guard 释放后恢复
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
