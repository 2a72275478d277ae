//! 行情分析模块
//!
//! 行情源只提供当前快照，这里在其基础上：
//! - 模拟近 7 日的日K线（随机游走，末日收盘价锚定当前价）
//! - 计算周涨跌、周高低点和 1D/3D/7D 涨跌幅
//!
//! 两部分都是同步纯计算，不持有任何状态

mod aggregation;
mod error;
mod synthesizer;

pub use aggregation::aggregate;
pub use error::AnalyticsError;
pub use synthesizer::synthesize;

use crate::models::{PriceSnapshot, WeeklySeries};

/// 价格必须为有限正数
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, AnalyticsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AnalyticsError::InvalidPrice { field, value })
    }
}

/// 由快照生成完整周度视图：模拟历史 + 聚合
pub fn weekly_series(snapshot: &PriceSnapshot) -> Result<WeeklySeries, AnalyticsError> {
    let history = synthesize(snapshot.price, &snapshot.symbol)?;
    aggregate(snapshot, history)
}
