//! 脚本进度日志
//! 开始 / 分节 / 完成 / 错误四类输出，全部挂在带 script_id 的 span 下

use tracing::Span;

use crate::error::ScriptError;

/// 下划线 + 青色
const URL_STYLE: &str = "\x1b[4;36m";
const STYLE_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub struct ScriptLogger {
    script_id: &'static str,
    category: &'static str,
    version: &'static str,
    ansi: bool,
    span: Span,
}

impl ScriptLogger {
    pub fn new(script_id: &'static str, category: &'static str, version: &'static str) -> Self {
        let span = tracing::info_span!(
            "script",
            script_id = script_id,
            script_category = category,
            version = version
        );
        Self {
            script_id,
            category,
            version,
            ansi: false,
            span,
        }
    }

    /// 文本日志开启 ANSI 时高亮 URL；JSON 日志保持纯文本
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn script_id(&self) -> &'static str {
        self.script_id
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn start(&self, message: &str) {
        tracing::info!("🏁 {}", message);
    }

    pub fn section(&self, title: &str) {
        tracing::info!("━━━ {} ━━━", title);
    }

    /// 供人工复制到浏览器的 URL
    pub fn url(&self, label: &str, url: &str) {
        tracing::info!(url = %url, "{} {}", label, self.styled_url(url));
    }

    pub fn styled_url(&self, url: &str) -> String {
        if self.ansi {
            format!("{}{}{}", URL_STYLE, url, STYLE_RESET)
        } else {
            url.to_string()
        }
    }

    pub fn complete(&self, message: &str) {
        tracing::info!("🎉 {}", message);
    }

    pub fn error(&self, err: &ScriptError) {
        tracing::error!(code = err.code().as_str(), "{}", err);
    }
}
