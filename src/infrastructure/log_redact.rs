//! 日志脱敏
//! 运营者私钥只能以前后缀形式出现在日志中

/// 可脱敏trait
pub trait SensitiveRedact {
    fn redact(&self) -> String;
}

/// 脱敏十六进制字符串（显示前缀和后缀）
///
/// 按字符而非字节截取，输入不是合法十六进制时也不会 panic
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    let len = hex.chars().count();
    if len <= show_chars * 2 {
        return "*".repeat(len);
    }

    let prefix: String = hex.chars().take(show_chars).collect();
    let suffix: String = hex.chars().skip(len - show_chars).collect();
    format!("{}...{}", prefix, suffix)
}
