//! 镜像节点代币记录
//! 只用于日志展示，不与 TokenSpec 比对

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::string_utils::display_or_undefined;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorToken {
    pub name: Option<String>,
    /// 镜像节点以字符串返回，兼容数字
    pub total_supply: Option<String>,
}

impl MirrorToken {
    /// 宽松解析：字段缺失或类型不符均视为 None，不报错
    pub fn from_json(v: &Value) -> Self {
        let name = v.get("name").and_then(|n| n.as_str()).map(str::to_owned);
        let total_supply = match v.get("total_supply") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self { name, total_supply }
    }

    pub fn name_display(&self) -> &str {
        display_or_undefined(self.name.as_deref())
    }

    pub fn total_supply_display(&self) -> &str {
        display_or_undefined(self.total_supply.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_full_record() {
        let token = MirrorToken::from_json(&json!({
            "token_id": "0.0.1234",
            "name": "htsFt coin",
            "symbol": "HTSFT",
            "total_supply": "1000000"
        }));
        assert_eq!(token.name_display(), "htsFt coin");
        assert_eq!(token.total_supply_display(), "1000000");
    }

    #[test]
    fn test_numeric_supply() {
        let token = MirrorToken::from_json(&json!({ "total_supply": 1000000 }));
        assert_eq!(token.total_supply.as_deref(), Some("1000000"));
    }

    #[test]
    fn test_missing_fields_render_undefined() {
        let token = MirrorToken::from_json(&json!({
            "_status": { "messages": [{ "message": "Not found" }] }
        }));
        assert_eq!(token, MirrorToken::default());
        assert_eq!(token.name_display(), "undefined");
        assert_eq!(token.total_supply_display(), "undefined");
    }

    #[test]
    fn test_non_object_body() {
        let token = MirrorToken::from_json(&json!([1, 2, 3]));
        assert!(token.name.is_none());
        assert!(token.total_supply.is_none());
    }
}
