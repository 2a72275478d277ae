//! 周度行情数据模型
//!
//! 模拟日K线和在其之上计算出的周度统计

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::PriceSnapshot;

/// 单日模拟 K 线
///
/// 满足 `low <= min(open, close) <= max(open, close) <= high`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// 日期
    pub date: chrono::NaiveDate,
    /// 开盘价
    pub open: f64,
    /// 最高价
    pub high: f64,
    /// 最低价
    pub low: f64,
    /// 收盘价
    pub close: f64,
    /// 模拟成交量，仅用于展示
    pub volume: u64,
}

/// 涨跌幅统计区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "3D")]
    ThreeDay,
    #[serde(rename = "7D")]
    SevenDay,
}

/// 单个品种的周度视图
///
/// 每次刷新整体重算，不做增量更新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeries {
    /// 品种名称
    pub symbol: String,
    /// 当前行情
    pub current: PriceSnapshot,
    /// 近 7 日 K 线，旧到新
    pub history: Vec<HistoricalPoint>,
    /// 周涨跌额
    pub weekly_change: f64,
    /// 周涨跌幅（百分比）
    pub weekly_change_percent: f64,
    /// 周内最高收盘价
    pub weekly_high: f64,
    /// 周内最低收盘价
    pub weekly_low: f64,
    /// 分区间涨跌幅（百分比）
    pub period_changes: BTreeMap<Period, f64>,
}
