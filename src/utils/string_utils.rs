//! 字符串工具模块

/// 检查字符串是否为空或只包含空白字符
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// 可选值的日志展示；缺失时输出 `undefined`
pub fn display_or_undefined(opt: Option<&str>) -> &str {
    opt.unwrap_or("undefined")
}

/// 去掉 URL 末尾的斜杠，便于拼接路径
pub fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
