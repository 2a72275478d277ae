//! 行情刷新流程
//!
//! 一轮刷新：拿到快照 -> 逐品种模拟历史并聚合 -> 用整批快照判断提醒

use serde::Serialize;

use crate::alerts::AlertStore;
use crate::analytics;
use crate::models::{AlertRule, PriceSnapshot, WeeklySeries};

/// 一轮刷新的结果
#[derive(Debug, Serialize)]
pub struct MarketOverview {
    /// 各品种周度视图
    pub series: Vec<WeeklySeries>,
    /// 本轮新触发的提醒
    pub fired_alerts: Vec<AlertRule>,
}

/// 对已获取的快照执行一轮刷新
///
/// 单个快照计算失败只跳过该品种，不影响其余品种和提醒判断
pub fn refresh(snapshots: &[PriceSnapshot], alerts: &AlertStore) -> MarketOverview {
    let series = snapshots
        .iter()
        .filter_map(|snapshot| match analytics::weekly_series(snapshot) {
            Ok(weekly) => Some(weekly),
            Err(e) => {
                log::warn!("{} 周度数据计算失败，已跳过: {}", snapshot.symbol, e);
                None
            }
        })
        .collect();

    let fired_alerts = alerts.evaluate(snapshots);
    if !fired_alerts.is_empty() {
        log::info!("本轮刷新触发 {} 条提醒", fired_alerts.len());
    }

    MarketOverview { series, fired_alerts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlertDirection;

    fn snapshot(symbol: &str, price: f64) -> PriceSnapshot {
        PriceSnapshot {
            symbol: symbol.to_string(),
            price,
            prev_close: price,
            open: price,
            high: price,
            low: price,
            change_24h: 0.0,
            change_pct: 0.0,
            current_time: String::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn builds_series_per_snapshot_and_fires_alerts() {
        let alerts = AlertStore::new();
        let rule = alerts.add_alert("silver", 90.0, AlertDirection::Below, true).unwrap();
        alerts.add_alert("gold", 9000.0, AlertDirection::Above, true).unwrap();

        let overview = refresh(&[snapshot("Gold", 7200.0), snapshot("Silver", 85.5)], &alerts);

        assert_eq!(overview.series.len(), 2);
        assert_eq!(overview.series[0].symbol, "Gold");
        assert_eq!(overview.series[1].history.last().unwrap().close, 85.5);
        assert_eq!(overview.fired_alerts.len(), 1);
        assert_eq!(overview.fired_alerts[0].id, rule.id);
        assert_eq!(alerts.list_active().len(), 1);
    }

    #[test]
    fn invalid_snapshot_is_skipped_but_still_evaluated() {
        let alerts = AlertStore::new();
        alerts.add_alert("platinum", 1.0, AlertDirection::Below, true).unwrap();

        let overview = refresh(&[snapshot("Platinum", 0.0), snapshot("Gold", 7200.0)], &alerts);

        assert_eq!(overview.series.len(), 1);
        assert_eq!(overview.series[0].symbol, "Gold");
        assert_eq!(overview.fired_alerts.len(), 1);
    }
}
