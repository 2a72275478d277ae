//! 贵金属行情数据模型
//!
//! 定义支持的金属品种和实时行情快照

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 支持的贵金属品种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Gold,
    Silver,
    Platinum,
    Palladium,
}

impl Metal {
    /// 全部品种，按展示顺序排列
    pub const ALL: [Metal; 4] = [Metal::Gold, Metal::Silver, Metal::Platinum, Metal::Palladium];

    /// ISO 4217 贵金属代码
    pub fn code(self) -> &'static str {
        match self {
            Metal::Gold => "XAU",
            Metal::Silver => "XAG",
            Metal::Platinum => "XPT",
            Metal::Palladium => "XPD",
        }
    }

    /// 小写标识，用作路径参数
    pub fn key(self) -> &'static str {
        match self {
            Metal::Gold => "gold",
            Metal::Silver => "silver",
            Metal::Platinum => "platinum",
            Metal::Palladium => "palladium",
        }
    }

    /// 展示名称（首字母大写）
    pub fn display_name(self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
            Metal::Platinum => "Platinum",
            Metal::Palladium => "Palladium",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 未知品种
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Metal {0} not found")]
pub struct UnknownMetal(pub String);

impl FromStr for Metal {
    type Err = UnknownMetal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Metal::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s) || m.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMetal(s.to_string()))
    }
}

/// 单个品种的实时行情快照
///
/// 价格单位均为 卢比/克；快照不可变，新数据到达时整体替换
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// 品种名称（大小写不敏感）
    #[serde(rename = "metal")]
    pub symbol: String,
    /// 当前价格
    #[serde(rename = "price_per_gram_inr")]
    pub price: f64,
    /// 昨收价
    #[serde(rename = "prev_close_price")]
    pub prev_close: f64,
    /// 开盘价
    #[serde(rename = "open_price")]
    pub open: f64,
    /// 日内最高价
    #[serde(rename = "high_price")]
    pub high: f64,
    /// 日内最低价
    #[serde(rename = "low_price")]
    pub low: f64,
    /// 24 小时涨跌额
    pub change_24h: f64,
    /// 24 小时涨跌幅（百分比）
    pub change_pct: f64,
    /// 展示用时间 (YYYY-MM-DD HH:MM:SS)
    pub current_time: String,
    /// 时间戳（ISO 8601 格式）
    pub timestamp: String,
}

impl PriceSnapshot {
    /// 品种是否匹配（忽略大小写）
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes_case_insensitively() {
        assert_eq!("GOLD".parse::<Metal>(), Ok(Metal::Gold));
        assert_eq!(" silver ".parse::<Metal>(), Ok(Metal::Silver));
        assert_eq!("xpt".parse::<Metal>(), Ok(Metal::Platinum));
        assert_eq!("Palladium".parse::<Metal>(), Ok(Metal::Palladium));
        assert_eq!("copper".parse::<Metal>(), Err(UnknownMetal("copper".into())));
    }

    #[test]
    fn snapshot_uses_price_api_field_names() {
        let snapshot = PriceSnapshot {
            symbol: "Gold".to_string(),
            price: 7200.0,
            prev_close: 7184.5,
            open: 7190.0,
            high: 7220.0,
            low: 7180.0,
            change_24h: 15.5,
            change_pct: 0.58,
            current_time: "2024-03-01 10:00:00".to_string(),
            timestamp: "2024-03-01T10:00:00+05:30".to_string(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "change_24h", "change_pct", "current_time", "high_price", "low_price", "metal",
                "open_price", "prev_close_price", "price_per_gram_inr", "timestamp",
            ]
        );
        assert_eq!(json["metal"], "Gold");
        assert_eq!(json["price_per_gram_inr"], 7200.0);

        let back: PriceSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(serde_json::to_string(&Metal::Platinum).unwrap(), "\"platinum\"");
        assert_eq!(Metal::Gold.to_string(), "Gold");
    }
}
