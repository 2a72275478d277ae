//! 周度统计计算

use std::collections::BTreeMap;

use super::{ensure_positive, AnalyticsError};
use crate::models::{HistoricalPoint, Period, PriceSnapshot, WeeklySeries};

/// 1D 参考点下标（倒数第二天）
const ONE_DAY_INDEX: usize = 5;
/// 3D 参考点下标
const THREE_DAY_INDEX: usize = 3;

fn percent_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}

/// 根据快照和模拟序列计算周度视图
///
/// 高低点只看收盘价；序列不足时缺失的参考点回退为首日收盘价
pub fn aggregate(
    snapshot: &PriceSnapshot,
    history: Vec<HistoricalPoint>,
) -> Result<WeeklySeries, AnalyticsError> {
    let first = history.first().ok_or(AnalyticsError::EmptySeries)?;
    let first_price = ensure_positive("first close", first.close)?;
    let last_price = ensure_positive("current price", snapshot.price)?;

    let reference = |index: usize| -> Result<f64, AnalyticsError> {
        match history.get(index) {
            Some(point) => ensure_positive("reference close", point.close),
            None => Ok(first_price),
        }
    };
    let one_day_price = reference(ONE_DAY_INDEX)?;
    let three_day_price = reference(THREE_DAY_INDEX)?;

    let closes = history.iter().map(|p| p.close);
    let weekly_high = closes.clone().fold(f64::NEG_INFINITY, f64::max);
    let weekly_low = closes.fold(f64::INFINITY, f64::min);

    let weekly_change_percent = percent_change(first_price, last_price);
    let period_changes = BTreeMap::from([
        (Period::OneDay, percent_change(one_day_price, last_price)),
        (Period::ThreeDay, percent_change(three_day_price, last_price)),
        (Period::SevenDay, weekly_change_percent),
    ]);

    Ok(WeeklySeries {
        symbol: snapshot.symbol.clone(),
        current: snapshot.clone(),
        history,
        weekly_change: last_price - first_price,
        weekly_change_percent,
        weekly_high,
        weekly_low,
        period_changes,
    })
}
