//! 公共常量和辅助函数

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;

use crate::models::{Metal, PriceSnapshot};

/// 每金衡盎司克数
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// 获取印度标准时间
pub fn india_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Kolkata)
}

/// 美元/盎司 换算为 卢比/克，保留两位小数
pub fn usd_per_oz_to_inr_per_gram(usd: f64, usd_to_inr: f64) -> f64 {
    round2(usd / TROY_OUNCE_GRAMS * usd_to_inr)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 已换算为 卢比/克 的报价
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetalQuote {
    pub price: f64,
    pub prev_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub change_24h: f64,
    pub change_pct: f64,
}

impl MetalQuote {
    /// 加上品种名称和时间，生成行情快照
    pub fn into_snapshot(self, metal: Metal, now: DateTime<Tz>) -> PriceSnapshot {
        PriceSnapshot {
            symbol: metal.display_name().to_string(),
            price: self.price,
            prev_close: self.prev_close,
            open: self.open,
            high: self.high,
            low: self.low,
            change_24h: self.change_24h,
            change_pct: self.change_pct,
            current_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            timestamp: now.to_rfc3339(),
        }
    }
}
