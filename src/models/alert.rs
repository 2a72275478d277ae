//! 价格提醒数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 触发方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    /// 价格上涨到目标价及以上时触发
    Above,
    /// 价格下跌到目标价及以下时触发
    Below,
}

impl AlertDirection {
    /// 根据目标价和当前价推断方向：目标价不低于当前价视为向上突破
    pub fn infer(target_price: f64, current_price: f64) -> Self {
        if target_price >= current_price {
            AlertDirection::Above
        } else {
            AlertDirection::Below
        }
    }

    /// 给定价格是否满足触发条件
    pub fn is_crossed(self, price: f64, target_price: f64) -> bool {
        match self {
            AlertDirection::Above => price >= target_price,
            AlertDirection::Below => price <= target_price,
        }
    }
}

/// 提醒状态
///
/// `Active -> Fired` 是单向转换，触发后不再重新启用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Active,
    Fired,
}

/// 用户设置的价格提醒
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    /// 唯一标识
    pub id: String,
    /// 目标品种
    pub symbol: String,
    /// 目标价格
    pub target_price: f64,
    /// 触发方向
    pub direction: AlertDirection,
    /// 当前状态
    pub state: AlertState,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 触发时间
    #[serde(default)]
    pub triggered_at: Option<DateTime<Utc>>,
}

impl AlertRule {
    pub fn is_active(&self) -> bool {
        self.state == AlertState::Active
    }
}

/// 创建提醒请求体
///
/// 未指定 `direction` 时由接口层按当前价格推断
#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    pub symbol: String,
    pub target_price: f64,
    #[serde(default)]
    pub direction: Option<AlertDirection>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// 提醒列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    /// 为 true 时返回全部提醒（含已触发）
    #[serde(default)]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_is_inclusive_at_target() {
        assert!(AlertDirection::Above.is_crossed(2100.0, 2100.0));
        assert!(AlertDirection::Above.is_crossed(2150.0, 2100.0));
        assert!(!AlertDirection::Above.is_crossed(2099.99, 2100.0));
        assert!(AlertDirection::Below.is_crossed(20.0, 20.0));
        assert!(!AlertDirection::Below.is_crossed(20.01, 20.0));
    }

    #[test]
    fn infers_direction_from_current_price() {
        assert_eq!(AlertDirection::infer(7300.0, 7200.0), AlertDirection::Above);
        assert_eq!(AlertDirection::infer(7200.0, 7200.0), AlertDirection::Above);
        assert_eq!(AlertDirection::infer(7100.0, 7200.0), AlertDirection::Below);
    }

    #[test]
    fn create_request_direction_is_optional() {
        let req: CreateAlertRequest =
            serde_json::from_str(r#"{"symbol": "gold", "target_price": 7300}"#).unwrap();
        assert_eq!(req.direction, None);
        assert_eq!(req.active, None);

        let req: CreateAlertRequest =
            serde_json::from_str(r#"{"symbol": "gold", "target_price": 7300, "direction": "below"}"#)
                .unwrap();
        assert_eq!(req.direction, Some(AlertDirection::Below));
    }
}
