//! 提醒规则存储与触发判断

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

use super::KeyValueStore;
use crate::models::{AlertDirection, AlertRule, AlertState, PriceSnapshot};

/// 持久化时使用的键
pub const ALERTS_KEY: &str = "price_alerts";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlertError {
    #[error("invalid target price: {0} (must be a positive finite number)")]
    InvalidTargetPrice(f64),
}

/// 提醒规则存储
///
/// 规则集合由一把互斥锁保护，触发判断与状态回写在同一次加锁内完成
pub struct AlertStore {
    rules: Mutex<HashMap<String, AlertRule>>,
    backend: Option<Box<dyn KeyValueStore>>,
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore {
    /// 创建不落盘的空存储
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(HashMap::new()),
            backend: None,
        }
    }

    /// 创建带持久化的存储，并加载已保存的规则
    ///
    /// 数据缺失或损坏时按空集合处理
    pub fn with_backend(backend: Box<dyn KeyValueStore>) -> Self {
        let rules = load_rules(backend.as_ref());
        Self {
            rules: Mutex::new(rules),
            backend: Some(backend),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, AlertRule>> {
        self.rules.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 新建提醒
    pub fn add_alert(
        &self,
        symbol: &str,
        target_price: f64,
        direction: AlertDirection,
        active: bool,
    ) -> Result<AlertRule, AlertError> {
        if !(target_price.is_finite() && target_price > 0.0) {
            return Err(AlertError::InvalidTargetPrice(target_price));
        }

        let rule = AlertRule {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: symbol.trim().to_string(),
            target_price,
            direction,
            state: if active { AlertState::Active } else { AlertState::Fired },
            created_at: Utc::now(),
            triggered_at: None,
        };

        let mut rules = self.lock();
        rules.insert(rule.id.clone(), rule.clone());
        self.persist(&rules);

        log::info!(
            "新建提醒 {}: {} {:?} {}",
            rule.id, rule.symbol, rule.direction, rule.target_price
        );
        Ok(rule)
    }

    /// 删除提醒，不存在时不做任何事；返回是否确实删除
    pub fn remove_alert(&self, id: &str) -> bool {
        let mut rules = self.lock();
        let removed = rules.remove(id).is_some();
        if removed {
            self.persist(&rules);
            log::info!("删除提醒 {}", id);
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<AlertRule> {
        self.lock().get(id).cloned()
    }

    /// 仍处于激活状态的提醒，按创建时间排序
    pub fn list_active(&self) -> Vec<AlertRule> {
        let mut active: Vec<AlertRule> =
            self.lock().values().filter(|r| r.is_active()).cloned().collect();
        active.sort_by_key(|r| r.created_at);
        active
    }

    /// 全部提醒（含已触发），按创建时间排序
    pub fn list_all(&self) -> Vec<AlertRule> {
        let mut all: Vec<AlertRule> = self.lock().values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        all
    }

    /// 用一批行情快照判断激活中的提醒
    ///
    /// 满足条件的提醒被置为已触发并返回；没有对应品种快照的提醒保持不变
    pub fn evaluate(&self, snapshots: &[PriceSnapshot]) -> Vec<AlertRule> {
        let now = Utc::now();
        let mut rules = self.lock();
        let mut fired = Vec::new();

        for rule in rules.values_mut().filter(|r| r.is_active()) {
            let Some(snapshot) = snapshots.iter().find(|s| s.is_symbol(&rule.symbol)) else {
                continue;
            };
            if rule.direction.is_crossed(snapshot.price, rule.target_price) {
                rule.state = AlertState::Fired;
                rule.triggered_at = Some(now);
                log::info!(
                    "提醒 {} 已触发: {} 当前价 {} / 目标价 {}",
                    rule.id, rule.symbol, snapshot.price, rule.target_price
                );
                fired.push(rule.clone());
            }
        }

        if !fired.is_empty() {
            self.persist(&rules);
        }
        fired.sort_by_key(|r| r.created_at);
        fired
    }

    /// 保存失败只记录日志，不影响内存中的状态
    ///
    /// 在持有规则锁的情况下同步写盘，会阻塞当前 actix 工作线程；
    /// 规则量为个位数到几十条，单次写入只有几 KB，可以接受
    fn persist(&self, rules: &HashMap<String, AlertRule>) {
        let Some(backend) = &self.backend else {
            return;
        };
        let mut list: Vec<&AlertRule> = rules.values().collect();
        list.sort_by_key(|r| r.created_at);

        let result = serde_json::to_string(&list)
            .map_err(anyhow::Error::from)
            .and_then(|json| backend.set(ALERTS_KEY, &json));
        if let Err(e) = result {
            log::error!("保存提醒失败: {:#}", e);
        }
    }
}

fn load_rules(backend: &dyn KeyValueStore) -> HashMap<String, AlertRule> {
    let raw = match backend.get(ALERTS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return HashMap::new(),
        Err(e) => {
            log::warn!("读取已保存的提醒失败，按空集合处理: {:#}", e);
            return HashMap::new();
        }
    };

    match serde_json::from_str::<Vec<AlertRule>>(&raw) {
        Ok(list) => {
            log::info!("加载 {} 条已保存的提醒", list.len());
            list.into_iter().map(|r| (r.id.clone(), r)).collect()
        }
        Err(e) => {
            log::warn!("已保存的提醒数据损坏，按空集合处理: {}", e);
            HashMap::new()
        }
    }
}
